//! HTTP handlers.

pub mod health;
pub mod proposals;
pub mod status;
