//! Error types for the todo API client.
//!
//! # Design
//! Rejections the server is expected to produce (400 on create, 404 on
//! delete, any non-200 on update) are not errors here: they come back as
//! [`crate::ApiOutcome::Rejected`]. `ApiError` covers the failures a caller
//! cannot act on besides telling the user.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by `TodoClient` parse methods and by [`crate::Api`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("A network error has occurred.")]
    Network(#[from] TransportError),

    /// The server answered with a status the operation has no meaning for.
    #[error("unexpected HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
