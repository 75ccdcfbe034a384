//! UI state holders for the search and detail screens.
//!
//! State is published through `tokio::sync::watch`: the view-model is the only
//! writer, screens subscribe and re-render on change. Tasks spawned by a
//! view-model are aborted when it is dropped.

use std::sync::{Mutex, PoisonError};
use tokio::task::AbortHandle;

pub mod detail;
pub mod search;

pub use detail::{DetailState, DetailUiState, DetailViewModel};
pub use search::{SearchEvent, SearchState, SearchUiState, SearchViewModel};

/// Holds the single in-flight request of a view-model.
#[derive(Debug, Default)]
struct TaskSlot(Mutex<Option<AbortHandle>>);

impl TaskSlot {
    /// Store `next`, aborting whatever was running before.
    fn replace(&self, next: Option<AbortHandle>) {
        let mut slot = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = std::mem::replace(&mut *slot, next) {
            previous.abort();
        }
    }

    fn cancel(&self) {
        self.replace(None);
    }
}
