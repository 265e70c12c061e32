//! Error types for the table-store boundary.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! can be inspected by callers. The repository itself never classifies or
//! wraps store failures; these variants exist for adapters to produce, and
//! the repository propagates them verbatim. A legitimate miss is never an
//! error: point lookups return `Option` and listings return an empty vec.

use super::domain::MalformedKeyError;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by table-store adapters and record mapping.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The underlying store or transport failed.
    #[error("store error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// Encoding or decoding a record document failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A connection-level failure occurred.
    #[error("connection error: {0}")]
    Connection(String),

    /// A stored row key violates the tagged-key scheme.
    #[error(transparent)]
    MalformedKey(#[from] Arc<MalformedKeyError>),
}

impl StoreError {
    /// Creates a transport error from any error type.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

impl From<MalformedKeyError> for StoreError {
    fn from(err: MalformedKeyError) -> Self {
        Self::MalformedKey(Arc::new(err))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
