use http::StatusCode;
use thiserror::Error;

/// Errors generated by the lookup client.
#[derive(Debug, Error)]
pub enum Error {
    /// Request failed local validation before submission.
    #[error(transparent)]
    Core(#[from] trailkit_core::Error),

    /// Named trail does not exist.
    #[error("trail not found: {0}")]
    TrailNotFound(String),

    /// Service rejected the continuation token.
    ///
    /// Tokens expire; retrying the same token will not succeed.
    #[error("continuation token is invalid or has expired")]
    InvalidContinuationToken,

    /// Service rejected the request as invalid.
    ///
    /// Covers filter combinations, time ranges and page size
    /// bounds the service refused; never retried.
    #[error("service rejected the request, {code}: {message}")]
    InvalidRequest {
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
    },

    /// Lookup request rate was exceeded.
    ///
    /// The service accepts one lookup request per second per
    /// account; callers should back off before retrying.
    #[error("lookup request rate exceeded")]
    Throttled,

    /// Operation was attempted after the client was shut down.
    #[error("client is closed")]
    Closed,

    /// Transport failed to reach the service.
    ///
    /// Escape hatch for [Transport](crate::Transport)
    /// implementations whose connectivity failures are not
    /// `reqwest` errors; the built-in HTTP transport reports
    /// [Error::Reqwest] instead.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Service reported an error the client has no mapping for.
    #[error("service error {code}: {message}")]
    Service {
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
    },

    /// Response could not be interpreted as a service response.
    ///
    /// Raised when the body is not JSON, such as an intermediary
    /// error page, or when an error body does not decode.
    #[error("unexpected response with status code {0}")]
    UnexpectedResponseCode(StatusCode),

    /// Error generated by the HTTP transport.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Error parsing a URI.
    #[error(transparent)]
    InvalidUri(#[from] http::uri::InvalidUri),

    /// Error parsing a URL.
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    /// Error encoding or decoding a wire body.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from the transport layer.
    ///
    /// Transport failures may be retried by the transport
    /// collaborator; every other kind requires the caller to
    /// correct the input or back off.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Reqwest(_))
    }
}
