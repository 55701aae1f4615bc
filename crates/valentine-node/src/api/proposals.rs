//! Proposal API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use valentine_core::{NewProposal, Proposal, ProposalId, ProposalUpdate, ValentineError};

use crate::error::ApiError;
use crate::state::AppState;

/// Create a proposal.
pub async fn create_proposal(
    State(state): State<AppState>,
    Json(req): Json<NewProposal>,
) -> Result<Json<Proposal>, ApiError> {
    let proposal = state.proposals.create(req).await?;
    Ok(Json(proposal))
}

/// Get a proposal by ID.
pub async fn get_proposal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Proposal>, ApiError> {
    let id = path_id(id)?;

    let proposal = state
        .proposals
        .get(&id)
        .await?
        .ok_or_else(|| ValentineError::proposal_not_found(id.as_str()))?;

    Ok(Json(proposal))
}

/// Partially update a proposal.
pub async fn update_proposal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProposalUpdate>,
) -> Result<Json<Proposal>, ApiError> {
    let id = path_id(id)?;
    let proposal = state.proposals.update(&id, update).await?;
    Ok(Json(proposal))
}

/// List proposals.
pub async fn list_proposals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Proposal>>, ApiError> {
    Ok(Json(state.proposals.list().await?))
}

/// An id that cannot exist in the store is simply not found.
fn path_id(raw: String) -> Result<ProposalId, ValentineError> {
    ProposalId::new(raw.as_str()).map_err(|_| ValentineError::proposal_not_found(raw))
}
