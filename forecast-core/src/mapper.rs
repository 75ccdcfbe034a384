//! DTO -> domain conversions.

use crate::{
    api::dto::{CurrentWeatherDto, ForecastDayDto, LocationDto, WeatherForecastResponseDto},
    model::{CurrentWeather, ForecastDay, Location, WeatherForecast},
};

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            region: dto.region,
            country: dto.country,
            lat: dto.lat,
            lon: dto.lon,
        }
    }
}

impl From<CurrentWeatherDto> for CurrentWeather {
    fn from(dto: CurrentWeatherDto) -> Self {
        Self {
            temperature: dto.temp_c,
            feels_like: dto.feelslike_c,
            condition: dto.condition.text,
            icon_url: icon_url(&dto.condition.icon),
        }
    }
}

impl From<ForecastDayDto> for ForecastDay {
    fn from(dto: ForecastDayDto) -> Self {
        Self {
            date: dto.date,
            date_epoch: dto.date_epoch,
            max_temp: dto.day.max_temp_c,
            min_temp: dto.day.min_temp_c,
            avg_temp: dto.day.avg_temp_c,
            condition: dto.day.condition.text,
            icon_url: icon_url(&dto.day.condition.icon),
        }
    }
}

impl From<WeatherForecastResponseDto> for WeatherForecast {
    fn from(dto: WeatherForecastResponseDto) -> Self {
        Self {
            location: dto.location.into(),
            current_weather: dto.current.into(),
            forecast_days: convert_list(dto.forecast.forecast_day),
        }
    }
}

/// Map every element, keeping order.
pub fn convert_list<I, O: From<I>>(input: Vec<I>) -> Vec<O> {
    input.into_iter().map(O::from).collect()
}

/// The provider sends protocol-relative icon paths ("//cdn.weatherapi.com/...").
pub fn icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        icon.to_string()
    }
}
