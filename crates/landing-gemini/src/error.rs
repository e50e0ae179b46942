use landing_core::error::GenerationError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Gemini format error: {0}")]
    Shape(String),

    #[error("API key is missing or blank")]
    MissingApiKey,
}

impl From<GeminiError> for GenerationError {
    fn from(value: GeminiError) -> Self {
        match value {
            GeminiError::Http(err) => GenerationError::TransportFailure(describe_transport(err)),
            GeminiError::Api { status, body } => GenerationError::HttpFailure {
                status: status.as_u16(),
                details: body,
            },
            GeminiError::Malformed(err) => GenerationError::MalformedResponse(err.to_string()),
            GeminiError::Shape(reason) => GenerationError::UnexpectedShape(reason),
            GeminiError::MissingApiKey => GenerationError::MissingCredential,
        }
    }
}

/// `reqwest` errors embed the request URL, which carries the API key as a
/// query parameter. Strip it before the message reaches logs or users.
fn describe_transport(err: reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };
    format!("{kind}: {}", err.without_url())
}
