//! Application state.

use std::sync::Arc;

use valentine_store::{InMemoryProposalStore, ProposalStore, StatusLog};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Proposal records.
    pub proposals: Arc<dyn ProposalStore>,

    /// Client status checks.
    pub status: StatusLog,
}

impl AppState {
    /// Create a new application state backed by memory.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryProposalStore::new()))
    }

    /// Create a state around an existing store.
    pub fn with_store(proposals: Arc<dyn ProposalStore>) -> Self {
        Self {
            proposals,
            status: StatusLog::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
