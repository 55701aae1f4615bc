//! # Valentine Core
//!
//! Core types and page logic for Valentine proposals.
//!
//! This crate provides the building blocks shared by the store service and
//! the client:
//! - [`Proposal`] - The persisted record
//! - [`CharacterKey`] / [`catalog`] - Characters and their display assets
//! - [`AnimationPresenter`] - Animation with static fallbacks
//! - [`ProposalFlow`] - Recipient page state machine
//! - [`FloatingHearts`] - Ambient decoration
//! - [`ValentineError`] - Error types

pub mod catalog;
pub mod decoration;
pub mod error;
pub mod flow;
pub mod presenter;
pub mod proposal;
pub mod types;

// Re-exports for convenience
pub use catalog::{CatalogEntry, CharacterKey};
pub use decoration::{FloatingHeart, FloatingHearts};
pub use error::{Result, ValentineError};
pub use flow::{AcceptRequest, FetchFailure, FetchRequest, PageState, ProposalFlow, RecoveryLink};
pub use presenter::{AnimationPresenter, PresenterState, Rendered};
pub use proposal::{
    NewProposal, Proposal, ProposalBuilder, ProposalUpdate, ProposalView, DEFAULT_MESSAGE,
};
pub use types::*;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::catalog::{CatalogEntry, CharacterKey};
    pub use crate::error::{Result, ValentineError};
    pub use crate::flow::{PageState, ProposalFlow};
    pub use crate::presenter::{AnimationPresenter, Rendered};
    pub use crate::proposal::{NewProposal, Proposal, ProposalUpdate, ProposalView};
    pub use crate::types::{ProposalId, Route};
}
