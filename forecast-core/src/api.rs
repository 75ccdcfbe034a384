use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;

use crate::api::dto::{LocationDto, WeatherForecastResponseDto};

pub mod dto;
pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

/// Failures surfaced by the raw HTTP client, before any classification.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not reach the weather service: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two WeatherAPI.com endpoints the app relies on.
#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    async fn search_locations(&self, query: &str) -> Result<Vec<LocationDto>, ApiError>;

    async fn get_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> Result<WeatherForecastResponseDto, ApiError>;
}
