//! Valentine client implementation.

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use valentine_core::{
    AcceptRequest, FetchRequest, NewProposal, Proposal, ProposalId, ProposalUpdate, ProposalView,
    Result, ValentineError,
};

/// Environment variable holding the backend origin. The API lives under `/api`.
pub const BACKEND_URL_VAR: &str = "VALENTINE_BACKEND_URL";

/// Client for the proposal store HTTP API.
#[derive(Clone)]
pub struct ValentineClient {
    /// Base URL of the API, e.g. `https://host/api`.
    api_base: String,

    /// HTTP client.
    http_client: reqwest::Client,
}

impl ValentineClient {
    /// Create a client for the API at `api_base`. No request is made.
    pub fn new(api_base: &str) -> Self {
        Self::with_http_client(api_base, reqwest::Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_http_client(api_base: &str, http_client: reqwest::Client) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Create a client and check that the API answers.
    pub async fn connect(api_base: &str) -> Result<Self> {
        let client = Self::new(api_base);

        let root_url = format!("{}/", client.api_base);
        client
            .http_client
            .get(&root_url)
            .send()
            .await
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?
            .error_for_status()
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?;

        Ok(client)
    }

    /// Create a client from [`BACKEND_URL_VAR`].
    pub fn from_env() -> Result<Self> {
        let backend = std::env::var(BACKEND_URL_VAR)
            .map_err(|_| ValentineError::Config(format!("{BACKEND_URL_VAR} is not set")))?;

        Ok(Self::new(&format!("{}/api", backend.trim_end_matches('/'))))
    }

    /// Base URL of the API.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build an endpoint URL under the API base. Each segment is
    /// percent-encoded, so an id can never escape its path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = &self.api_base;
        let mut url = Url::parse(base)
            .map_err(|e| ValentineError::Config(format!("invalid API base {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ValentineError::Config(format!("{base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Create a proposal.
    pub async fn create_proposal(&self, request: &NewProposal) -> Result<Proposal> {
        let url = self.endpoint(&["proposals"])?;

        let response = self
            .http_client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?;

        decode(check(response, None).await?).await
    }

    /// Get the full record of a proposal.
    pub async fn get_proposal(&self, id: &ProposalId) -> Result<Proposal> {
        let url = self.endpoint(&["proposals", id.as_str()])?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?;

        decode(check(response, Some(id)).await?).await
    }

    /// Execute the read request of a page mount.
    ///
    /// Only the fields the page renders are decoded.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<ProposalView> {
        let url = self.endpoint(&["proposals", request.proposal_id.as_str()])?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?;

        decode(check(response, Some(&request.proposal_id)).await?).await
    }

    /// Apply a partial update and return the updated record.
    pub async fn update_proposal(
        &self,
        id: &ProposalId,
        update: ProposalUpdate,
    ) -> Result<Proposal> {
        let url = self.endpoint(&["proposals", id.as_str()])?;

        let response = self
            .http_client
            .patch(url)
            .json(&update)
            .send()
            .await
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?;

        decode(check(response, Some(id)).await?).await
    }

    /// Send an acceptance update. The response body is ignored.
    pub async fn send_accept(&self, request: &AcceptRequest) -> Result<()> {
        let url = self.endpoint(&["proposals", request.proposal_id.as_str()])?;

        let response = self
            .http_client
            .patch(url)
            .json(&request.update)
            .send()
            .await
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?;

        check(response, Some(&request.proposal_id)).await?;
        Ok(())
    }

    /// Mark a proposal as accepted.
    pub async fn accept_proposal(&self, id: &ProposalId) -> Result<()> {
        self.send_accept(&AcceptRequest {
            proposal_id: id.clone(),
            update: ProposalUpdate::accept(),
        })
        .await
    }

    /// List stored proposals.
    pub async fn list_proposals(&self) -> Result<Vec<Proposal>> {
        let url = self.endpoint(&["proposals"])?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ValentineError::ConnectionError(e.to_string()))?;

        decode(check(response, None).await?).await
    }
}

/// Turn non-success statuses into errors. 404 on a proposal becomes `NotFound`.
async fn check(response: Response, id: Option<&ProposalId>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ValentineError::proposal_not_found(id.as_str()));
        }
    }

    let message = response.text().await.unwrap_or_default();
    Err(ValentineError::Http {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ValentineError::SerializationError(e.to_string()))
}
