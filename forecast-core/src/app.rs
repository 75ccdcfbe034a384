use std::{sync::Arc, time::Duration};

use crate::{
    Config,
    api::WeatherApiClient,
    repository::{RemoteWeatherRepository, WeatherRepository},
    usecase::{GetWeatherForecast, SearchLocations},
    viewmodel::{DetailViewModel, SearchViewModel},
};

/// Wires client -> repository -> use cases from a [`Config`].
#[derive(Debug, Clone)]
pub struct WeatherApp {
    pub search_locations: SearchLocations,
    pub get_forecast: GetWeatherForecast,
    search_debounce: Duration,
}

impl WeatherApp {
    pub fn new(repository: Arc<dyn WeatherRepository>, search_debounce: Duration) -> Self {
        Self {
            search_locations: SearchLocations::new(Arc::clone(&repository)),
            get_forecast: GetWeatherForecast::new(repository),
            search_debounce,
        }
    }

    /// Construct the app from config; fails when no API key is available.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        let api_key = config.resolve_api_key()?;

        let client = WeatherApiClient::with_base_url(api_key, &config.base_url);
        let repository =
            RemoteWeatherRepository::new(Arc::new(client)).with_forecast_days(config.forecast_days);

        Ok(Self::new(Arc::new(repository), config.search_debounce()))
    }

    /// Must be called inside a tokio runtime.
    pub fn search_view_model(&self) -> SearchViewModel {
        SearchViewModel::with_debounce(self.search_locations.clone(), self.search_debounce)
    }

    pub fn detail_view_model(&self) -> DetailViewModel {
        DetailViewModel::new(self.get_forecast.clone())
    }
}
