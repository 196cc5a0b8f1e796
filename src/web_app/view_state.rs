// web_app/view_state.rs - Fetch lifecycles for the home page
//
// The page keeps these values inside signals; everything here is plain
// Rust so the state transitions can be unit tested without a reactive
// runtime or a browser.

use std::fmt::Display;
use std::time::Duration;

use crate::web_app::model::{CatalogPage, Movie, TrendingMovie, MOVIES_ERROR, TRENDING_ERROR};

/// Settle delay between the last keystroke and the search request
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Lifecycle of one remote read
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Monotonic counter; the highest value handed out is the only current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Invalidate every earlier ticket and return a fresh one
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }

    pub fn current(&self) -> u64 {
        self.0
    }
}

/// Debounce bookkeeping for the search box.
///
/// Every edit arms a timer carrying a new ticket; when a timer fires its
/// value is published only if no later edit re-armed the gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    edits: Generation,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.edits.advance()
    }

    pub fn is_settled(&self, ticket: u64) -> bool {
        self.edits.is_current(ticket)
    }

    /// Whether a firing timer should publish `value`: its ticket must be the
    /// latest and the value must differ from what is already published.
    pub fn settle(&self, ticket: u64, value: &str, published: &str) -> bool {
        self.is_settled(ticket) && value != published
    }
}

/// State of the "All Movies" list plus the generation of the latest request
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieFeed {
    state: FetchState<Vec<Movie>>,
    requests: Generation,
}

impl MovieFeed {
    pub fn state(&self) -> &FetchState<Vec<Movie>> {
        &self.state
    }

    /// Enter `Loading` and return the ticket the response must present
    pub fn begin(&mut self) -> u64 {
        self.state = FetchState::Loading;
        self.requests.advance()
    }

    /// Apply a response. Returns `false` (and changes nothing) when a newer
    /// request has been issued since `ticket` was handed out.
    pub fn resolve<E: Display>(&mut self, ticket: u64, outcome: Result<CatalogPage, E>) -> bool {
        if !self.requests.is_current(ticket) {
            return false;
        }

        self.state = match outcome {
            Ok(CatalogPage { error: Some(message), .. }) => FetchState::Error(message),
            Ok(CatalogPage { results, error: None }) => FetchState::Success(results),
            Err(_) => FetchState::Error(MOVIES_ERROR.to_string()),
        };
        true
    }

    /// Movies to render; empty unless the last request succeeded
    pub fn movies(&self) -> Vec<Movie> {
        self.state.data().cloned().unwrap_or_default()
    }
}

/// Map the trending read onto its fetch state
pub fn trending_state<E: Display>(outcome: Result<Vec<TrendingMovie>, E>) -> FetchState<Vec<TrendingMovie>> {
    match outcome {
        Ok(entries) => FetchState::Success(entries),
        Err(_) => FetchState::Error(TRENDING_ERROR.to_string()),
    }
}

/// The trending section renders while loading, on error, or with entries.
pub fn trending_visible(state: &FetchState<Vec<TrendingMovie>>) -> bool {
    match state {
        FetchState::Idle => false,
        FetchState::Loading | FetchState::Error(_) => true,
        FetchState::Success(entries) => !entries.is_empty(),
    }
}

/// Pair each trending entry with its 1-based rank
pub fn ranked(entries: &[TrendingMovie]) -> Vec<(usize, TrendingMovie)> {
    entries
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, entry)| (index + 1, entry))
        .collect()
}
