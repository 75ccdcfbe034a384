use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::{
    ApiError, WeatherApi,
    dto::{LocationDto, WeatherForecastResponseDto},
};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// `reqwest` client for the WeatherAPI.com v1 endpoints.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("GET {url} {:?}", params);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(ApiError::Connection)?;

        let status = res.status();
        let body = res.text().await.map_err(ApiError::Connection)?;

        if !status.is_success() {
            return Err(ApiError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherApi for WeatherApiClient {
    async fn search_locations(&self, query: &str) -> Result<Vec<LocationDto>, ApiError> {
        self.get_json("search.json", &[("q", query)]).await
    }

    async fn get_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> Result<WeatherForecastResponseDto, ApiError> {
        let days = days.to_string();
        self.get_json("forecast.json", &[("q", location), ("days", days.as_str())]).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = WeatherApiClient::with_base_url("KEY".into(), "http://localhost:8080/v1/");
        assert_eq!(client.endpoint("search.json"), "http://localhost:8080/v1/search.json");
    }

    #[test]
    fn default_base_url_is_weatherapi_v1() {
        let client = WeatherApiClient::new("KEY".into());
        assert_eq!(client.endpoint("forecast.json"), "https://api.weatherapi.com/v1/forecast.json");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_connection_error() {
        // Nothing listens on the discard port locally.
        let client = WeatherApiClient::with_base_url("KEY".into(), "http://127.0.0.1:9/v1");

        let err = client.search_locations("London").await.unwrap_err();
        assert!(matches!(err, ApiError::Connection(_)), "got {err:?}");
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("Server Error"), "Server Error");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "é".repeat(250);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }
}
