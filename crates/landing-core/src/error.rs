//! Unified error type exposed by **`landing-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the presenter.  Each variant maps onto exactly
//! one user-visible message, so keep the set small and the meaning sharp.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GenerationError>;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key was supplied. Raised before any network traffic happens.
    #[error("the Gemini API key (GEMINI_API_KEY) is not configured")]
    MissingCredential,

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status}: {details}")]
    HttpFailure { status: u16, details: String },

    /// A 2xx response whose body is not JSON at all.
    #[error("response body is not valid JSON: {0}")]
    MalformedResponse(String),

    /// Valid JSON, but `candidates[0].content.parts[0].text` is absent.
    ///
    /// The service may legitimately return no candidates, so callers treat
    /// this as "no content produced" rather than a hard failure.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// DNS, connect, TLS or timeout failure below the HTTP layer.
    #[error("transport failure: {0}")]
    TransportFailure(String),

    /// The cancellation token fired before the response arrived.
    #[error("generation was cancelled")]
    Cancelled,

    /// The selected backend does not know how to serve the requested model.
    #[error("backend does not support model `{0}`")]
    ModelNotSupported(String),
}

/// Stable, payload-free tag for a [`GenerationError`].
///
/// Handy for logging fields and for tests that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingCredential,
    HttpFailure,
    MalformedResponse,
    UnexpectedShape,
    TransportFailure,
    Cancelled,
    ModelNotSupported,
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::MissingCredential => ErrorKind::MissingCredential,
            GenerationError::HttpFailure { .. } => ErrorKind::HttpFailure,
            GenerationError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            GenerationError::UnexpectedShape(_) => ErrorKind::UnexpectedShape,
            GenerationError::TransportFailure(_) => ErrorKind::TransportFailure,
            GenerationError::Cancelled => ErrorKind::Cancelled,
            GenerationError::ModelNotSupported(_) => ErrorKind::ModelNotSupported,
        }
    }

    /// `true` for failures that mean "nothing was produced" rather than
    /// "something broke".
    pub fn is_soft(&self) -> bool {
        matches!(self, GenerationError::UnexpectedShape(_))
    }
}
