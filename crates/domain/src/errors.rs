//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Cadence
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CadenceError {
    /// Malformed input caught before any remote call (empty title,
    /// empty platform set, malformed patch).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation referenced an id absent from the store or the remote
    /// scheduling service.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A mutation was requested for an item id that already has a
    /// reconciliation in flight.
    #[error("Conflict in progress: {0}")]
    ConflictInProgress(String),

    /// Disallowed status change (e.g. published back to draft).
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Remote scheduling service failed, timed out, or is unreachable.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invariant breach or unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;
