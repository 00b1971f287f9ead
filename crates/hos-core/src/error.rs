//! Errors raised while reading planner documents.
//!
//! The grid engine itself never fails; these only cover documents that are
//! not valid JSON or do not have the expected shape.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// The trip document could not be decoded.
    #[error("invalid trip document: {0}")]
    Trip(#[source] serde_json::Error),

    /// The flat event list could not be decoded.
    #[error("invalid event list: {0}")]
    Events(#[source] serde_json::Error),
}
