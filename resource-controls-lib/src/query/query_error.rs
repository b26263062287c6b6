use core::time::Duration;
use thiserror::Error;

/// Failures that prevent a resource query from producing an answer.
///
/// None of these say anything about whether the resource exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The request could not be sent or the response could not be read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider rejected the credentials.
    #[error("not authorized (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// The provider answered with a status that is neither success nor "not found".
    #[error("unexpected HTTP {status} from provider: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The provider answered, but not with something describing the requested resource.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// No answer arrived within the allotted time.
    #[error("query timed out after {0:?}")]
    Timeout(Duration),
}
