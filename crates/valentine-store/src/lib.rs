//! # Valentine Store
//!
//! Persistence for proposals and client status checks.

pub mod status;
pub mod store;

pub use status::StatusLog;
pub use store::{InMemoryProposalStore, ProposalStore, LIST_LIMIT};
