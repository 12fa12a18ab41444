//! The seam between the core and whatever performs HTTP.

use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// The request could not be completed: connection refused, DNS failure,
/// broken pipe and the like. Any HTTP status, including 5xx, is a response
/// and not a `TransportError`.
#[derive(Debug, Error)]
#[error("transport failure: {details}")]
pub struct TransportError {
    details: String,
}

impl TransportError {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

/// Executes a single request. Implementations must return non-2xx statuses
/// as `Ok(HttpResponse)` so the client can interpret them.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}
