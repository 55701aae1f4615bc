//! Recipient page driver.
//!
//! Runs a [`ProposalFlow`] against a [`ValentineClient`]: one fetch per mount,
//! acceptance sent on a background task without waiting for the answer.

use tokio::task::JoinHandle;
use tracing::{debug, error, warn};
use valentine_core::{
    AnimationPresenter, FloatingHearts, PageState, ProposalFlow, ProposalId, Route,
};

use crate::client::ValentineClient;

/// One mount of the recipient page.
pub struct ProposalPage {
    client: ValentineClient,
    flow: ProposalFlow,
    presenter: Option<AnimationPresenter>,
    hearts: FloatingHearts,
}

impl ProposalPage {
    /// Mount the page for `proposal_id` and wait for the fetch to resolve.
    pub async fn mount(client: ValentineClient, proposal_id: ProposalId) -> Self {
        let (mut flow, request) = ProposalFlow::mount(proposal_id);
        let hearts = FloatingHearts::generate();

        let result = client.fetch(&request).await;
        let presenter = match flow.resolve(result) {
            Ok(PageState::Loaded(view)) => Some(AnimationPresenter::mounted(view.character())),
            Ok(_) => None,
            Err(e) => {
                error!(error = %e, "Fetch resolved twice");
                None
            }
        };

        Self {
            client,
            flow,
            presenter,
            hearts,
        }
    }

    /// Mount from a URL path. Returns `None` without any request unless the
    /// path names a proposal.
    pub async fn mount_path(client: ValentineClient, path: &str) -> Option<Self> {
        match Route::parse(path) {
            Route::Proposal(id) => Some(Self::mount(client, id).await),
            Route::Home | Route::NotFound => None,
        }
    }

    /// Current page state.
    pub fn state(&self) -> &PageState {
        self.flow.state()
    }

    /// Identifier this page was mounted with.
    pub fn proposal_id(&self) -> &ProposalId {
        self.flow.proposal_id()
    }

    /// Presenter for the loaded character. `None` unless loaded.
    pub fn presenter(&self) -> Option<&AnimationPresenter> {
        self.presenter.as_ref()
    }

    /// Mutable presenter, for forwarding asset load errors.
    pub fn presenter_mut(&mut self) -> Option<&mut AnimationPresenter> {
        self.presenter.as_mut()
    }

    /// Background decoration for this mount.
    pub fn hearts(&self) -> &FloatingHearts {
        &self.hearts
    }

    /// Accept the proposal.
    ///
    /// Sends one update on a spawned task and returns immediately. Failures
    /// are logged only; the page state never changes. Returns `None` unless
    /// the proposal is loaded. Must be called within a tokio runtime.
    pub fn accept(&self) -> Option<JoinHandle<()>> {
        let request = self.flow.accept()?;
        let client = self.client.clone();

        Some(tokio::spawn(async move {
            match client.send_accept(&request).await {
                Ok(()) => debug!(proposal_id = %request.proposal_id, "Proposal accepted"),
                Err(e) => warn!(
                    proposal_id = %request.proposal_id,
                    error = %e,
                    "Error updating proposal"
                ),
            }
        }))
    }
}
