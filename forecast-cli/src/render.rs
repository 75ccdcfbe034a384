//! Human-friendly terminal output.

use forecast_core::{
    Location, Route, WeatherForecast,
    format::{format_temperature, to_short_date_format},
    viewmodel::{DetailState, DetailUiState, SearchUiState},
};

pub fn splash() {
    println!();
    println!("  ☁  forecast");
    println!("  current weather and a short-range forecast, powered by WeatherAPI.com");
    println!();
}

pub fn screen_title(route: &Route) {
    let title = match route {
        Route::Splash => return,
        Route::WeatherSearch => "Search Location".to_string(),
        Route::WeatherDetail { location } => format!("Weather for {location}"),
        Route::Error => "Error".to_string(),
    };
    println!("── {title} ──");
}

pub fn search_help() {
    println!(
        "Type a city or airport (3+ letters). \
         Commands: #<n> open result, :r retry, :c clear, :q quit"
    );
}

pub fn detail_help() {
    println!("Commands: :r retry, :b back, :q quit");
}

pub fn locations(locations: &[Location]) {
    for (i, location) in locations.iter().enumerate() {
        println!(
            "{:>3}. {}  ({:.2}, {:.2})",
            i + 1,
            location.display_name(),
            location.lat,
            location.lon
        );
    }
}

pub fn search_ui_state(state: &SearchUiState) {
    match state {
        SearchUiState::Idle => println!("Start typing to search."),
        SearchUiState::Loading => println!("Searching..."),
        SearchUiState::Success(found) => locations(found),
        SearchUiState::Empty(query) => println!("No locations found for \"{query}\"."),
        SearchUiState::Error(message) => println!("{message} (:r to retry)"),
    }
}

pub fn detail_state(state: &DetailState) {
    match &state.ui_state {
        DetailUiState::Loading => println!("Loading forecast for {}...", state.location),
        DetailUiState::Success { forecast: fc, average_temperature } => {
            forecast(fc, *average_temperature)
        }
        DetailUiState::Error(message) => println!("{message} (:r to retry)"),
    }
}

pub fn forecast(forecast: &WeatherForecast, average_temperature: f64) {
    let current = &forecast.current_weather;

    println!("{}", forecast.location.display_name());
    println!(
        "  Now: {} (feels like {}), {}",
        format_temperature(current.temperature),
        format_temperature(current.feels_like),
        current.condition,
    );
    println!();

    for day in &forecast.forecast_days {
        let weekday = day.weekday().unwrap_or_default();
        println!(
            "  {:<3} {}  H:{}  L:{}  {}",
            weekday,
            to_short_date_format(&day.date),
            format_temperature(day.max_temp),
            format_temperature(day.min_temp),
            day.condition,
        );
    }

    println!();
    println!("  Average high: {}", format_temperature(average_temperature));
}
