//! User-visible status messages.
//!
//! Every failure kind gets its own wording so an operator can tell a dead
//! network from a bad key from an empty answer at a glance.

use landing_core::error::GenerationError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

const CONNECTIVITY_HINT: &str =
    "Please check your internet connection and that your API key is valid and active.";

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn empty_description() -> Self {
        Self::new(
            NoticeLevel::Warning,
            "Please enter a description to generate the landing page.",
        )
    }

    pub fn generated() -> Self {
        Self::new(NoticeLevel::Success, "Landing page generated.")
    }

    /// Crash inside the generation task itself.
    pub fn unexpected(details: impl std::fmt::Display) -> Self {
        Self::new(
            NoticeLevel::Error,
            format!("An unexpected error occurred: {details}"),
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&GenerationError> for Notice {
    fn from(err: &GenerationError) -> Self {
        match err {
            GenerationError::MissingCredential => Notice::new(
                NoticeLevel::Error,
                "Error: the Gemini API key (GEMINI_API_KEY) is not configured in the environment.",
            )
            .with_hint(
                "Please set your API key as an environment variable, for example in a `.env` \
                 file at the root of your project.",
            ),
            GenerationError::HttpFailure { status, details } => Notice::new(
                NoticeLevel::Error,
                format!("Error while calling the Gemini API: HTTP {status}: {details}"),
            )
            .with_hint(CONNECTIVITY_HINT),
            GenerationError::TransportFailure(details) => Notice::new(
                NoticeLevel::Error,
                format!("Error while calling the Gemini API: {details}"),
            )
            .with_hint(CONNECTIVITY_HINT),
            GenerationError::MalformedResponse(_) => Notice::new(
                NoticeLevel::Error,
                "JSON decoding error: the API response is not valid JSON.",
            ),
            GenerationError::UnexpectedShape(_) => Notice::new(
                NoticeLevel::Info,
                "Sorry, no HTML content could be generated. The API response was unexpected.",
            ),
            GenerationError::Cancelled | GenerationError::ModelNotSupported(_) => {
                Notice::unexpected(err)
            }
        }
    }
}
