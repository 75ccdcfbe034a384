//! Interactive terminal session: splash, then search and detail screens.

use anyhow::{Context, Result};
use forecast_core::{
    NavStack, Route, WeatherApp,
    viewmodel::{DetailUiState, SearchEvent, SearchUiState},
};
use log::info;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

const SPLASH_DURATION: Duration = Duration::from_millis(800);

/// One line of user input, interpreted for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Back,
    Retry,
    Clear,
    Open(usize),
    Query(String),
}

pub fn parse_input(line: &str) -> Input {
    match line.trim() {
        ":q" | ":quit" => Input::Quit,
        ":b" | ":back" => Input::Back,
        ":r" | ":retry" => Input::Retry,
        ":c" | ":clear" => Input::Clear,
        cmd => match cmd.strip_prefix('#').map(str::parse::<usize>) {
            Some(Ok(n)) => Input::Open(n),
            _ => Input::Query(line.trim_end_matches(['\r', '\n']).to_string()),
        },
    }
}

pub async fn run(app: &WeatherApp) -> Result<()> {
    let mut nav = NavStack::default();
    render::splash();
    tokio::time::sleep(SPLASH_DURATION).await;
    nav.replace_top(Route::WeatherSearch);

    let search = app.search_view_model();
    let detail = app.detail_view_model();
    let mut search_updates = search.subscribe();
    let mut detail_updates = detail.subscribe();
    let mut last_search_ui = SearchUiState::Idle;
    let mut last_detail_ui: Option<DetailUiState> = None;

    render::screen_title(nav.current());
    render::search_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                let on_detail = matches!(nav.current(), Route::WeatherDetail { .. });

                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Back if on_detail => {
                        detail.cancel();
                        nav.pop();
                        last_detail_ui = None;
                        render::screen_title(nav.current());
                        render::search_ui_state(&search.state().ui_state);
                    }
                    Input::Retry if on_detail => detail.retry(),
                    Input::Retry => {
                        search.on_event(SearchEvent::Retry);
                    }
                    Input::Clear if !on_detail => {
                        search.on_event(SearchEvent::Clear);
                    }
                    Input::Open(n) if !on_detail => {
                        let SearchUiState::Success(found) = search.state().ui_state else {
                            println!("Nothing to open yet.");
                            continue;
                        };
                        let Some(location) = n.checked_sub(1).and_then(|i| found.get(i)) else {
                            println!("Pick a result between 1 and {}.", found.len());
                            continue;
                        };
                        if let Some(route) =
                            search.on_event(SearchEvent::LocationSelected(location.clone()))
                        {
                            info!("opening {}", location.display_name());
                            if let Route::WeatherDetail { location } = &route {
                                detail.load_weather_for_location(location);
                            }
                            nav.push(route);
                            render::screen_title(nav.current());
                            render::detail_help();
                        }
                    }
                    Input::Query(query) if !on_detail => {
                        search.on_event(SearchEvent::QueryChanged(query));
                    }
                    _ if on_detail => render::detail_help(),
                    _ => render::search_help(),
                }
            }
            Ok(()) = search_updates.changed() => {
                let ui_state = search_updates.borrow_and_update().ui_state.clone();
                if ui_state != last_search_ui && nav.current() == &Route::WeatherSearch {
                    render::search_ui_state(&ui_state);
                }
                last_search_ui = ui_state;
            }
            Ok(()) = detail_updates.changed() => {
                let state = detail_updates.borrow_and_update().clone();
                let on_detail = matches!(nav.current(), Route::WeatherDetail { .. });
                if on_detail && last_detail_ui.as_ref() != Some(&state.ui_state) {
                    render::detail_state(&state);
                    last_detail_ui = Some(state.ui_state);
                }
            }
        }
    }

    Ok(())
}
