//! Client status check log.

use std::sync::Arc;

use tokio::sync::RwLock;
use valentine_core::StatusCheck;

use crate::store::LIST_LIMIT;

/// Append-only log of status checks.
#[derive(Clone, Default)]
pub struct StatusLog {
    checks: Arc<RwLock<Vec<StatusCheck>>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check-in from `client_name`.
    pub async fn record(&self, client_name: impl Into<String>) -> StatusCheck {
        let check = StatusCheck::new(client_name);
        self.checks.write().await.push(check.clone());
        tracing::debug!(client = %check.client_name, "Recorded status check");
        check
    }

    /// Oldest first, at most [`LIST_LIMIT`].
    pub async fn list(&self) -> Vec<StatusCheck> {
        let checks = self.checks.read().await;
        checks.iter().take(LIST_LIMIT).cloned().collect()
    }
}
