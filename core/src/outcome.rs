//! Discriminated result of an API call that reached the server.

use crate::http::HttpResponse;

/// Either the operation's payload or the server's rejection message.
///
/// Transport failures are not represented here; they surface as
/// `Err(ApiError)` around this value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ApiOutcome<T> {
    Success(T),
    Rejected { status: u16, message: String },
}

impl<T> ApiOutcome<T> {
    pub(crate) fn rejected(response: HttpResponse) -> Self {
        ApiOutcome::Rejected {
            status: response.status,
            message: response.body,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }
}
