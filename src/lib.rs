//! Reviews Reconcile Library
//!
//! Post-deployment verification for the reviews service: compares the list of
//! running pods with the pods that appear in a request log.

pub mod cli;
pub mod config;
pub mod error;
pub mod reconcile;

pub use error::{ReconcileError, Result};
