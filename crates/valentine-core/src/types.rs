//! Common types used across Valentine crates.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValentineError};

/// Opaque identifier of a proposal.
///
/// Always non-empty, so holding one is enough to issue a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalId(String);

impl ProposalId {
    /// Wrap an identifier taken from a URL or a stored record.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValentineError::validation("proposal_id", "must not be empty"));
        }
        if id.contains('/') {
            return Err(ValentineError::validation("proposal_id", "must not contain '/'"));
        }
        if id == "." || id == ".." {
            return Err(ValentineError::validation("proposal_id", "must not be a dot segment"));
        }
        Ok(Self(id))
    }

    /// Assign a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the recipient-facing page for this proposal.
    pub fn share_path(&self) -> String {
        format!("/proposal/{}", self.0)
    }

    /// Full share link under the given frontend origin.
    pub fn share_url(&self, frontend_base: &str) -> String {
        format!("{}{}", frontend_base.trim_end_matches('/'), self.share_path())
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pages reachable in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Creation page.
    Home,
    /// Recipient page for one proposal.
    Proposal(ProposalId),
    /// Anything else.
    NotFound,
}

impl Route {
    /// Resolve a URL path to a route. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if path.is_empty() {
            return Route::Home;
        }

        match path.strip_prefix("/proposal/") {
            Some(id) => ProposalId::new(id)
                .map(Route::Proposal)
                .unwrap_or(Route::NotFound),
            None => Route::NotFound,
        }
    }

    /// Path for this route. `NotFound` maps back to the home page.
    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::Proposal(id) => id.share_path(),
        }
    }
}

/// A client liveness record kept by the store service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Record a check-in for `client_name` at the current time.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_id_rejects_empty() {
        assert!(ProposalId::new("").is_err());
        assert!(ProposalId::new("   ").is_err());
        assert!(ProposalId::new("a/b").is_err());
        assert!(ProposalId::new(".").is_err());
        assert!(ProposalId::new("..").is_err());
        assert!(ProposalId::new("a..b").is_ok());
        assert_eq!(ProposalId::new("abc123").unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_share_url() {
        let id = ProposalId::new("abc123").unwrap();
        assert_eq!(id.share_path(), "/proposal/abc123");
        assert_eq!(
            id.share_url("https://love.example.com/"),
            "https://love.example.com/proposal/abc123"
        );
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("/proposal/abc123?ref=share"),
            Route::Proposal(ProposalId::new("abc123").unwrap())
        );
        assert_eq!(
            Route::parse("/proposal/abc123/"),
            Route::Proposal(ProposalId::new("abc123").unwrap())
        );
        assert_eq!(Route::parse("/proposal/"), Route::NotFound);
        assert_eq!(Route::parse("/proposal/a/b"), Route::NotFound);
        assert_eq!(Route::parse("/proposal/.."), Route::NotFound);
        assert_eq!(Route::parse("/proposal/."), Route::NotFound);
        assert_eq!(Route::parse("/about"), Route::NotFound);
    }

    #[test]
    fn test_route_path_roundtrip() {
        let route = Route::parse("/proposal/xyz");
        assert_eq!(route.path(), "/proposal/xyz");
        assert_eq!(Route::NotFound.path(), "/");
    }
}
