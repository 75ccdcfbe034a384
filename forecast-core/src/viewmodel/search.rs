use log::debug;
use std::{sync::Arc, time::Duration};
use tokio::{sync::watch, task::JoinHandle, time};

use crate::{
    model::Location,
    navigation::Route,
    usecase::{MIN_QUERY_LENGTH, SearchLocations},
    viewmodel::TaskSlot,
};

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchUiState {
    /// Nothing searched yet, or the query was cleared.
    #[default]
    Idle,
    Loading,
    Success(Vec<Location>),
    /// The search ran but matched nothing.
    Empty(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Text as typed, updated on every keystroke.
    pub query: String,
    pub ui_state: SearchUiState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    QueryChanged(String),
    LocationSelected(Location),
    Clear,
    Retry,
}

#[derive(Debug)]
struct Inner {
    search: SearchLocations,
    state: watch::Sender<SearchState>,
    in_flight: TaskSlot,
}

impl Inner {
    fn launch_search(self: &Arc<Self>, query: String) {
        let this = Arc::clone(self);
        let task = tokio::spawn(async move { this.search(query).await });
        self.in_flight.replace(Some(task.abort_handle()));
    }

    async fn search(&self, query: String) {
        debug!("searching locations for '{query}'");
        self.state.send_modify(|s| s.ui_state = SearchUiState::Loading);

        let ui_state = match self.search.execute(&query).await {
            Ok(locations) if locations.is_empty() => SearchUiState::Empty(query),
            Ok(locations) => SearchUiState::Success(locations),
            Err(err) => SearchUiState::Error(err.to_string()),
        };

        self.state.send_modify(|s| s.ui_state = ui_state);
    }

    fn set_idle(&self) {
        self.in_flight.cancel();
        self.state.send_modify(|s| s.ui_state = SearchUiState::Idle);
    }
}

/// Search screen state: debounced location search driven by query edits.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct SearchViewModel {
    inner: Arc<Inner>,
    queries: watch::Sender<String>,
    pipeline: JoinHandle<()>,
}

impl SearchViewModel {
    pub fn new(search: SearchLocations) -> Self {
        Self::with_debounce(search, DEBOUNCE_DELAY)
    }

    pub fn with_debounce(search: SearchLocations, debounce: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        let (queries, query_rx) = watch::channel(String::new());

        let inner = Arc::new(Inner { search, state, in_flight: TaskSlot::default() });
        let pipeline = tokio::spawn(observe_queries(Arc::clone(&inner), query_rx, debounce));

        Self { inner, queries, pipeline }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    /// Apply a UI event. Returns the route to open, if the event navigates.
    pub fn on_event(&self, event: SearchEvent) -> Option<Route> {
        match event {
            SearchEvent::QueryChanged(query) => {
                self.inner.state.send_modify(|s| s.query = query.clone());
                self.queries.send_replace(query);
            }
            SearchEvent::LocationSelected(location) => {
                return Some(Route::WeatherDetail { location: location.query() });
            }
            SearchEvent::Clear => {
                self.inner.in_flight.cancel();
                self.inner.state.send_replace(SearchState::default());
                self.queries.send_replace(String::new());
            }
            SearchEvent::Retry => {
                let query = self.inner.state.borrow().query.clone();
                if !query.is_empty() {
                    self.inner.launch_search(query);
                }
            }
        }
        None
    }
}

impl Drop for SearchViewModel {
    fn drop(&mut self) {
        self.pipeline.abort();
        self.inner.in_flight.cancel();
    }
}

/// debounce -> distinct -> (len >= 3 || empty) -> search or go idle.
async fn observe_queries(
    inner: Arc<Inner>,
    mut queries: watch::Receiver<String>,
    debounce: Duration,
) {
    let mut last_emitted = String::new();

    while queries.changed().await.is_ok() {
        // Each new edit restarts the quiet period.
        loop {
            match time::timeout(debounce, queries.changed()).await {
                Ok(Ok(())) => continue,
                Ok(Err(_)) => return,
                Err(_) => break,
            }
        }

        let query = queries.borrow_and_update().clone();
        if query == last_emitted {
            continue;
        }
        last_emitted.clone_from(&query);

        if query.is_empty() {
            inner.set_idle();
        } else if query.trim().chars().count() >= MIN_QUERY_LENGTH {
            inner.launch_search(query);
        }
    }
}
