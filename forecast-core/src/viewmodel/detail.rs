use std::sync::Arc;
use tokio::sync::watch;

use crate::{
    model::WeatherForecast,
    usecase::{GetWeatherForecast, calculate_average_temperature},
    viewmodel::TaskSlot,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailUiState {
    #[default]
    Loading,
    Success { forecast: WeatherForecast, average_temperature: f64 },
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub location: String,
    pub ui_state: DetailUiState,
}

#[derive(Debug)]
struct Inner {
    get_forecast: GetWeatherForecast,
    state: watch::Sender<DetailState>,
    in_flight: TaskSlot,
}

/// Detail screen state: forecast for one location plus its average max temperature.
#[derive(Debug)]
pub struct DetailViewModel {
    inner: Arc<Inner>,
}

impl DetailViewModel {
    pub fn new(get_forecast: GetWeatherForecast) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self { inner: Arc::new(Inner { get_forecast, state, in_flight: TaskSlot::default() }) }
    }

    pub fn state(&self) -> DetailState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.inner.state.subscribe()
    }

    /// Remember `location` and fetch its forecast. Empty input is ignored.
    pub fn load_weather_for_location(&self, location: &str) {
        if location.is_empty() {
            return;
        }
        self.inner.state.send_modify(|s| s.location = location.to_string());
        self.load();
    }

    pub fn retry(&self) {
        self.load();
    }

    /// Abort the load in flight, if any. State is left as it was.
    pub fn cancel(&self) {
        self.inner.in_flight.cancel();
    }

    /// Wait for the current load to finish and return the resulting state.
    ///
    /// Returns straight away when no location has been loaded yet.
    pub async fn wait_until_settled(&self) -> DetailState {
        let mut rx = self.subscribe();
        if rx.borrow().location.is_empty() {
            return self.state();
        }
        let settled = match rx.wait_for(|s| s.ui_state != DetailUiState::Loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    fn load(&self) {
        let location = self.inner.state.borrow().location.clone();
        self.inner.state.send_modify(|s| s.ui_state = DetailUiState::Loading);

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            let ui_state = match inner.get_forecast.execute(&location).await {
                Ok(forecast) => {
                    let average_temperature =
                        calculate_average_temperature(&forecast.forecast_days);
                    DetailUiState::Success { forecast, average_temperature }
                }
                Err(err) => DetailUiState::Error(err.to_string()),
            };
            inner.state.send_modify(|s| s.ui_state = ui_state);
        });
        self.inner.in_flight.replace(Some(task.abort_handle()));
    }
}

impl Drop for DetailViewModel {
    fn drop(&mut self) {
        self.cancel();
    }
}
