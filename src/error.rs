//! Error types surfaced by session and API operations.
//!
//! ERROR HANDLING
//! ==============
//! HTTP rejections and transport failures both normalize into [`AuthError`],
//! whose `Display` output is always the user-facing message. Form handlers can
//! render `err.to_string()` without matching on the variant.

use thiserror::Error;

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// User-facing failure of `login`, `register`, `update_profile`, article
/// reads, and other API calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request failed before a response arrived.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: TransportError,
    },
    /// A 2xx response whose body did not match the expected shape.
    #[error("{message}")]
    InvalidResponse { message: String },
    /// The operation needs a bearer token and the session has none.
    #[error("You must be logged in to do that")]
    NotAuthenticated,
}

impl AuthError {
    /// HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
