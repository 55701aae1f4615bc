//! # Valentine SDK
//!
//! Client for the proposal store API and the recipient page driver built on it.

pub mod client;
pub mod page;

pub use client::ValentineClient;
pub use page::ProposalPage;

/// Prelude module for common imports.
pub mod prelude {
    pub use crate::client::ValentineClient;
    pub use crate::page::ProposalPage;
    pub use valentine_core::prelude::*;
}
