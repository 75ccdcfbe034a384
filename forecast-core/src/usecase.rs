//! Thin wrappers around the repository with input validation.

use log::debug;
use std::sync::Arc;

use crate::{
    error::{ForecastError, RepositoryError},
    model::{ForecastDay, Location, WeatherForecast},
    repository::WeatherRepository,
};

/// Shorter queries never reach the API.
pub const MIN_QUERY_LENGTH: usize = 3;

#[derive(Debug, Clone)]
pub struct SearchLocations {
    repository: Arc<dyn WeatherRepository>,
}

impl SearchLocations {
    pub fn new(repository: Arc<dyn WeatherRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: &str) -> Result<Vec<Location>, RepositoryError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LENGTH {
            debug!("query '{query}' too short, skipping search");
            return Ok(Vec::new());
        }

        self.repository.search_locations(query).await
    }
}

#[derive(Debug, Clone)]
pub struct GetWeatherForecast {
    repository: Arc<dyn WeatherRepository>,
}

impl GetWeatherForecast {
    pub fn new(repository: Arc<dyn WeatherRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, location: &str) -> Result<WeatherForecast, ForecastError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ForecastError::EmptyLocation);
        }

        Ok(self.repository.get_weather_forecast(location).await?)
    }
}

/// Mean of the daily maximums, rounded to one decimal; 0.0 for no days.
pub fn calculate_average_temperature(days: &[ForecastDay]) -> f64 {
    if days.is_empty() {
        return 0.0;
    }

    let sum: f64 = days.iter().map(|d| d.max_temp).sum();
    let average = sum / days.len() as f64;
    (average * 10.0).round() / 10.0
}


#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;

    #[tokio::test]
    async fn search_delegates_trimmed_query() {
        let repo = Arc::new(FakeRepository::with_locations(vec![location("Mosquera")]));
        let use_case = SearchLocations::new(repo.clone());

        let result = use_case.execute("  Mosquera ").await.expect("search succeeds");

        assert_eq!(result, vec![location("Mosquera")]);
        assert_eq!(repo.calls(), ["Mosquera"]);
    }

    #[tokio::test]
    async fn search_skips_repository_for_short_queries() {
        let repo = Arc::new(FakeRepository::with_locations(vec![location("Mosquera")]));
        let use_case = SearchLocations::new(repo.clone());

        for query in ["", "Mo", "  ab  ", "   "] {
            let result = use_case.execute(query).await.expect("short query is not an error");
            assert!(result.is_empty(), "query {query:?}");
        }
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn search_propagates_repository_failure() {
        let repo = Arc::new(FakeRepository::failing(RepositoryError::Connection));
        let use_case = SearchLocations::new(repo);

        let err = use_case.execute("Mosquera").await.unwrap_err();
        assert_eq!(err, RepositoryError::Connection);
    }

    #[tokio::test]
    async fn forecast_rejects_empty_and_blank_locations() {
        let repo = Arc::new(FakeRepository::with_forecast(forecast(&[20.0])));
        let use_case = GetWeatherForecast::new(repo.clone());

        for input in ["", "   \t"] {
            let err = use_case.execute(input).await.unwrap_err();
            assert_eq!(err, ForecastError::EmptyLocation);
            assert_eq!(err.to_string(), "Location cannot be empty");
        }
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn forecast_trims_location_and_keeps_special_characters() {
        let repo = Arc::new(FakeRepository::with_forecast(forecast(&[20.0, 21.0, 22.0])));
        let use_case = GetWeatherForecast::new(repo.clone());

        let result = use_case.execute("  São Paulo, Brasil ").await.expect("forecast succeeds");

        assert_eq!(result.forecast_days.len(), 3);
        assert_eq!(result.current_weather.condition, "Partly cloudy");
        assert_eq!(repo.calls(), ["São Paulo, Brasil"]);
    }

    #[tokio::test]
    async fn forecast_wraps_repository_failure() {
        let repo = Arc::new(FakeRepository::failing(RepositoryError::Server("503".into())));
        let use_case = GetWeatherForecast::new(repo);

        let err = use_case.execute("Mosquera").await.unwrap_err();
        assert_eq!(err, ForecastError::Repository(RepositoryError::Server("503".into())));
    }

    fn average(maxes: &[f64]) -> f64 {
        calculate_average_temperature(&maxes.iter().copied().map(day).collect::<Vec<_>>())
    }

    #[test]
    fn average_of_max_temperatures() {
        assert_eq!(average(&[22.0, 23.0, 21.0]), 22.0);
        assert_eq!(average(&[25.5]), 25.5);
        assert_eq!(average(&[45.0, 47.0, 46.0]), 46.0);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average(&[22.3, 23.7, 21.5]), 22.5);
        assert_eq!(average(&[22.2, 23.2, 21.2]), 22.2);
        assert_eq!(average(&[22.3, 23.3, 21.3]), 22.3);
        assert_eq!(average(&[-25.0, -30.0, -28.0]), -27.7);
    }

    #[test]
    fn average_handles_negative_and_mixed_values() {
        assert_eq!(average(&[-5.0, -3.0, -7.0]), -5.0);
        assert_eq!(average(&[-2.0, 5.0, 3.0]), 2.0);
    }

    #[test]
    fn average_of_no_days_is_zero() {
        assert_eq!(calculate_average_temperature(&[]), 0.0);
    }

    #[test]
    fn average_ignores_min_and_avg_fields() {
        let days = vec![
            ForecastDay { min_temp: -40.0, avg_temp: 99.0, ..day(10.0) },
            ForecastDay { min_temp: 50.0, avg_temp: -99.0, ..day(20.0) },
        ];
        assert_eq!(calculate_average_temperature(&days), 15.0);
    }
}
