use async_trait::async_trait;
use log::{debug, warn};
use std::{fmt::Debug, sync::Arc};

use crate::{
    api::{ApiError, WeatherApi},
    error::RepositoryError,
    mapper::convert_list,
    model::{Location, WeatherForecast},
};

/// Number of forecast days requested when nothing else is configured.
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

#[async_trait]
pub trait WeatherRepository: Send + Sync + Debug {
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, RepositoryError>;

    async fn get_weather_forecast(&self, location: &str)
    -> Result<WeatherForecast, RepositoryError>;
}

/// Repository backed by the remote weather API; no caching.
#[derive(Debug, Clone)]
pub struct RemoteWeatherRepository {
    api: Arc<dyn WeatherApi>,
    forecast_days: u8,
}

impl RemoteWeatherRepository {
    pub fn new(api: Arc<dyn WeatherApi>) -> Self {
        Self { api, forecast_days: DEFAULT_FORECAST_DAYS }
    }

    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }
}

#[async_trait]
impl WeatherRepository for RemoteWeatherRepository {
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, RepositoryError> {
        let dtos = self.api.search_locations(query).await.map_err(classify)?;
        debug!("search '{query}' returned {} locations", dtos.len());
        Ok(convert_list(dtos))
    }

    async fn get_weather_forecast(
        &self,
        location: &str,
    ) -> Result<WeatherForecast, RepositoryError> {
        let dto = self.api.get_forecast(location, self.forecast_days).await.map_err(classify)?;
        Ok(dto.into())
    }
}

fn classify(err: ApiError) -> RepositoryError {
    warn!("weather API call failed: {err}");
    match err {
        ApiError::Status { status, .. } => RepositoryError::Server(status.to_string()),
        ApiError::Connection(_) => RepositoryError::Connection,
        other => RepositoryError::Unexpected(other.to_string()),
    }
}
