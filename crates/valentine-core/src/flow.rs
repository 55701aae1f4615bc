//! Proposal fetch flow.
//!
//! The recipient page state machine. It never performs I/O: mounting yields a
//! [`FetchRequest`], the caller executes it and feeds the result back through
//! [`ProposalFlow::resolve`]. Accepting yields an [`AcceptRequest`] that the
//! caller sends without waiting on it.

use serde::Serialize;

use crate::error::{Result, ValentineError};
use crate::proposal::{ProposalUpdate, ProposalView};
use crate::types::{ProposalId, Route};

/// Shown when the store has no record for the identifier.
pub const NOT_FOUND_MESSAGE: &str =
    "This proposal was not found. It may have been removed or the link is incorrect.";

/// Shown for every other failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Label of the link back to the creation page.
pub const CREATE_OWN_LABEL: &str = "Create Your Own Proposal";

/// Why a fetch failed, as far as the page cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchFailure {
    /// The store answered 404.
    NotFound,
    /// Network error, server error or an unreadable body.
    Unavailable { reason: String },
}

impl FetchFailure {
    /// Classify an error returned by a store client.
    pub fn classify(err: &ValentineError) -> Self {
        match err {
            ValentineError::NotFound { .. } | ValentineError::Http { status: 404, .. } => {
                FetchFailure::NotFound
            }
            other => FetchFailure::Unavailable {
                reason: other.to_string(),
            },
        }
    }

    /// User-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            FetchFailure::NotFound => NOT_FOUND_MESSAGE,
            FetchFailure::Unavailable { .. } => GENERIC_ERROR_MESSAGE,
        }
    }

    /// Where the user can go from the error page.
    pub fn recovery(&self) -> RecoveryLink {
        RecoveryLink {
            label: CREATE_OWN_LABEL,
            route: Route::Home,
        }
    }
}

/// Navigation affordance shown on the error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryLink {
    pub label: &'static str,
    pub route: Route,
}

/// Read request issued on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub proposal_id: ProposalId,
}

/// Partial update issued when the recipient accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptRequest {
    pub proposal_id: ProposalId,
    pub update: ProposalUpdate,
}

/// What the recipient page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum PageState {
    Loading,
    Loaded(ProposalView),
    Error(FetchFailure),
}

impl PageState {
    fn name(&self) -> &'static str {
        match self {
            PageState::Loading => "loading",
            PageState::Loaded(_) => "loaded",
            PageState::Error(_) => "error",
        }
    }

    /// Returns true once the fetch has resolved.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PageState::Loading)
    }
}

/// State machine for one mount of the recipient page.
#[derive(Debug, Clone)]
pub struct ProposalFlow {
    proposal_id: ProposalId,
    state: PageState,
}

impl ProposalFlow {
    /// Enter `Loading` and return the single read request for this mount.
    pub fn mount(proposal_id: ProposalId) -> (Self, FetchRequest) {
        let request = FetchRequest {
            proposal_id: proposal_id.clone(),
        };
        let flow = Self {
            proposal_id,
            state: PageState::Loading,
        };
        (flow, request)
    }

    /// Feed the outcome of the read request.
    ///
    /// Only valid while `Loading`; a resolved flow rejects further results.
    pub fn resolve(&mut self, result: Result<ProposalView>) -> Result<&PageState> {
        if self.state.is_terminal() {
            return Err(ValentineError::InvalidTransition {
                from: self.state.name().to_string(),
                event: "resolve".to_string(),
            });
        }

        self.state = match result {
            Ok(view) => PageState::Loaded(view),
            Err(err) => {
                tracing::error!(
                    proposal_id = %self.proposal_id,
                    error = %err,
                    "Error fetching proposal"
                );
                PageState::Error(FetchFailure::classify(&err))
            }
        };

        Ok(&self.state)
    }

    /// Build the acceptance update. `None` unless the proposal is loaded.
    ///
    /// The page state is left untouched whatever happens to the request.
    pub fn accept(&self) -> Option<AcceptRequest> {
        match self.state {
            PageState::Loaded(_) => Some(AcceptRequest {
                proposal_id: self.proposal_id.clone(),
                update: ProposalUpdate::accept(),
            }),
            _ => None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Identifier this flow was mounted with.
    pub fn proposal_id(&self) -> &ProposalId {
        &self.proposal_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CharacterKey;

    fn id(raw: &str) -> ProposalId {
        ProposalId::new(raw).unwrap()
    }

    fn sam() -> ProposalView {
        ProposalView {
            valentine_name: "Sam".into(),
            custom_message: Some("Will you?".into()),
            character_choice: Some("bunny".into()),
        }
    }

    #[test]
    fn test_mount_issues_one_request() {
        let (flow, request) = ProposalFlow::mount(id("abc123"));
        assert_eq!(flow.state(), &PageState::Loading);
        assert_eq!(request.proposal_id, id("abc123"));
    }

    #[test]
    fn test_success_loads_verbatim() {
        let (mut flow, _) = ProposalFlow::mount(id("abc123"));
        let state = flow.resolve(Ok(sam())).unwrap();

        match state {
            PageState::Loaded(view) => {
                assert_eq!(view.valentine_name, "Sam");
                assert_eq!(view.custom_message.as_deref(), Some("Will you?"));
                assert_eq!(view.character(), CharacterKey::Bunny);
            }
            other => panic!("expected loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_resolves_only_once() {
        let (mut flow, _) = ProposalFlow::mount(id("abc123"));
        flow.resolve(Ok(sam())).unwrap();

        let second = flow.resolve(Err(ValentineError::ConnectionError("late".into())));
        assert!(matches!(second, Err(ValentineError::InvalidTransition { .. })));
        assert!(matches!(flow.state(), PageState::Loaded(_)));
    }

    #[test]
    fn test_not_found() {
        let (mut flow, _) = ProposalFlow::mount(id("zzz"));
        flow.resolve(Err(ValentineError::proposal_not_found("zzz"))).unwrap();

        assert_eq!(flow.state(), &PageState::Error(FetchFailure::NotFound));
        let PageState::Error(failure) = flow.state() else {
            unreachable!()
        };
        assert_eq!(failure.message(), NOT_FOUND_MESSAGE);
        assert_eq!(failure.recovery().route, Route::Home);
        assert_eq!(failure.recovery().label, "Create Your Own Proposal");
    }

    #[test]
    fn test_other_failures_are_generic() {
        let errors = [
            ValentineError::ConnectionError("connection refused".into()),
            ValentineError::Http { status: 500, message: "boom".into() },
            ValentineError::Http { status: 403, message: String::new() },
            ValentineError::SerializationError("missing field".into()),
        ];

        for err in errors {
            let (mut flow, _) = ProposalFlow::mount(id("abc123"));
            flow.resolve(Err(err)).unwrap();
            match flow.state() {
                PageState::Error(failure) => {
                    assert!(matches!(failure, FetchFailure::Unavailable { .. }));
                    assert_eq!(failure.message(), GENERIC_ERROR_MESSAGE);
                }
                other => panic!("expected error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_http_404_is_not_found() {
        let failure = FetchFailure::classify(&ValentineError::Http {
            status: 404,
            message: "Proposal not found".into(),
        });
        assert_eq!(failure, FetchFailure::NotFound);
    }

    #[test]
    fn test_accept_only_when_loaded() {
        let (mut flow, _) = ProposalFlow::mount(id("abc123"));
        assert!(flow.accept().is_none());

        flow.resolve(Ok(sam())).unwrap();
        let request = flow.accept().unwrap();
        assert_eq!(request.update, ProposalUpdate { accepted: true });
        assert_eq!(request.proposal_id, id("abc123"));
        assert!(matches!(flow.state(), PageState::Loaded(_)));

        let (mut failed, _) = ProposalFlow::mount(id("zzz"));
        failed.resolve(Err(ValentineError::proposal_not_found("zzz"))).unwrap();
        assert!(failed.accept().is_none());
    }

    #[test]
    fn test_page_state_serializes_tagged() {
        let json = serde_json::to_value(PageState::Error(FetchFailure::NotFound)).unwrap();
        assert_eq!(json["state"], "error");
        assert_eq!(json["data"]["kind"], "not_found");
    }
}
