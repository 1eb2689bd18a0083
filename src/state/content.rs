//! Loading/error/items state for the content list.

use crate::api::{ContentError, GrcItem};
use tracing::warn;

/// Which branch the screen renders, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBranch {
    Loading,
    Error,
    List,
}

/// Proof that a fetch was started, tagged with its generation.
///
/// Only the ticket of the latest fetch may settle the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct ContentState {
    pub items: Vec<GrcItem>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentState {
    /// Fresh state starts out loading
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }

    /// Start a fetch: show the spinner, clear the error, supersede older fetches
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Supersede any outstanding fetch without touching what is shown
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Settle a fetch.
    ///
    /// Returns `false` and leaves the state alone when the ticket is stale.
    /// On failure the previous items are kept.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Vec<GrcItem>, ContentError>) -> bool {
        if ticket.generation != self.generation {
            warn!(
                "Discarding stale content response (generation {} < {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        true
    }

    pub fn branch(&self) -> RenderBranch {
        if self.loading {
            RenderBranch::Loading
        } else if self.error.is_some() {
            RenderBranch::Error
        } else {
            RenderBranch::List
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }
}
