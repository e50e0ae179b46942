//! Abstractions that tie a **prompt** to a concrete **model**.
//!
//! A prompt for this service is a single block of text: the user's
//! description wrapped in fixed instructions.  [`Prompt`] is the finished
//! text, [`PromptTemplate`] is anything that knows how to produce one and
//! which model should answer it.
//!
//! ```rust
//! use landing_core::template::{Prompt, PromptTemplate};
//! use landing_core::model::{GeminiModel, Model};
//!
//! struct Hello;
//!
//! impl PromptTemplate for Hello {
//!     const MODEL: Model = Model::Gemini(GeminiModel::Gemini2_0Flash);
//!
//!     fn into_prompt(self) -> Prompt {
//!         Prompt::from("Say hello!")
//!     }
//! }
//!
//! assert_eq!(Hello.into_prompt().as_str(), "Say hello!");
//! ```
use std::fmt::Display;

use crate::model::Model;

/// The full text sent to the generative endpoint.
///
/// Opaque on purpose: once built, nothing in the workspace edits it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Prompt {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Prompt {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// High-level description of a prompt.
///
/// * `MODEL` – logical model identifier.  The back-end maps this to its own
///   naming scheme (`"gemini-2.0-flash"`, …).
/// * [`Self::into_prompt`] – consume `self` and render the final text.
///   Implementations must be pure: the same value always renders the same
///   bytes.
pub trait PromptTemplate {
    const MODEL: Model;

    fn into_prompt(self) -> Prompt;
}
