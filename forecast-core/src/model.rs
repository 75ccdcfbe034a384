use chrono::DateTime;
use serde::Serialize;

/// A place returned by the location search or attached to a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Provider id; forecast responses do not carry one.
    pub id: Option<i64>,
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// "name, region, country" with empty parts skipped.
    pub fn display_name(&self) -> String {
        [self.name.as_str(), self.region.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Query string that identifies this location unambiguously for the forecast endpoint.
    pub fn query(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// ISO date as sent by the provider, e.g. "2024-12-08".
    pub date: String,
    pub date_epoch: i64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub avg_temp: f64,
    pub condition: String,
    pub icon_url: String,
}

impl ForecastDay {
    /// Short weekday name ("Mon") derived from `date_epoch`.
    pub fn weekday(&self) -> Option<String> {
        DateTime::from_timestamp(self.date_epoch, 0).map(|dt| dt.format("%a").to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherForecast {
    pub location: Location,
    pub current_weather: CurrentWeather,
    pub forecast_days: Vec<ForecastDay>,
}
