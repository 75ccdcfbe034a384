//! Wire-format structs for WeatherAPI.com responses.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationDto {
    /// Present on search results only.
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionDto {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeatherDto {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: ConditionDto,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayDto {
    #[serde(rename = "maxtemp_c")]
    pub max_temp_c: f64,
    #[serde(rename = "mintemp_c")]
    pub min_temp_c: f64,
    #[serde(rename = "avgtemp_c")]
    pub avg_temp_c: f64,
    pub condition: ConditionDto,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDayDto {
    pub date: String,
    pub date_epoch: i64,
    pub day: DayDto,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDto {
    #[serde(rename = "forecastday")]
    pub forecast_day: Vec<ForecastDayDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherForecastResponseDto {
    pub location: LocationDto,
    pub current: CurrentWeatherDto,
    pub forecast: ForecastDto,
}


#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"[
        {"id": 2801268, "name": "London", "region": "City of London, Greater London",
         "country": "United Kingdom", "lat": 51.52, "lon": -0.11, "url": "london-city-of-london-greater-london-united-kingdom"},
        {"id": 315398, "name": "London", "region": "Ontario", "country": "Canada",
         "lat": 42.98, "lon": -81.25, "url": "london-ontario-canada"}
    ]"#;

    const FORECAST_BODY: &str = r#"{
        "location": {"name": "London", "region": "City of London, Greater London",
            "country": "United Kingdom", "lat": 51.52, "lon": -0.11,
            "tz_id": "Europe/London", "localtime_epoch": 1733650000, "localtime": "2024-12-08 9:26"},
        "current": {"temp_c": 8.2, "feelslike_c": 5.1, "is_day": 1,
            "condition": {"text": "Light rain", "icon": "//cdn.weatherapi.com/weather/64x64/day/296.png", "code": 1183}},
        "forecast": {"forecastday": [
            {"date": "2024-12-08", "date_epoch": 1733616000,
             "day": {"maxtemp_c": 10.4, "mintemp_c": 6.1, "avgtemp_c": 8.3,
                     "condition": {"text": "Moderate rain", "icon": "//cdn.weatherapi.com/weather/64x64/day/302.png", "code": 1189}},
             "hour": []}
        ]}
    }"#;

    #[test]
    fn decodes_search_results() {
        let dtos: Vec<LocationDto> = serde_json::from_str(SEARCH_BODY).expect("valid search JSON");

        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].id, Some(2801268));
        assert_eq!(dtos[1].region, "Ontario");
        assert_eq!(dtos[1].lon, -81.25);
    }

    #[test]
    fn decodes_forecast_and_ignores_unknown_fields() {
        let dto: WeatherForecastResponseDto =
            serde_json::from_str(FORECAST_BODY).expect("valid forecast JSON");

        assert_eq!(dto.location.id, None);
        assert_eq!(dto.current.feelslike_c, 5.1);
        assert_eq!(dto.current.condition.code, 1183);
        assert_eq!(dto.forecast.forecast_day.len(), 1);
        assert_eq!(dto.forecast.forecast_day[0].day.max_temp_c, 10.4);
    }

    #[test]
    fn rejects_forecast_without_current_block() {
        let body = r#"{"location": {"name": "x", "lat": 0.0, "lon": 0.0}, "forecast": {"forecastday": []}}"#;
        assert!(serde_json::from_str::<WeatherForecastResponseDto>(body).is_err());
    }
}
