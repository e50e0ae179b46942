//! Model identifiers used throughout the **landing** workspace.
//!
//! Application code picks an enum variant instead of typing literal strings
//! such as `"gemini-2.0-flash"`; the provider crate maps the variant onto its
//! own naming scheme.
//!
//! ```rust
//! use landing_core::model::{GeminiModel, Model};
//! assert_eq!(Model::from(GeminiModel::Gemini2_0Flash),
//!            Model::Gemini(GeminiModel::Gemini2_0Flash));
//! ```

use std::fmt::Display;

/// Universal identifier for a text-generation model.
///
/// * `Gemini` – models officially supported by the Gemini back-end.
/// * `Custom` – any other model name, passed through verbatim. Use this for
///   preview or experimental models.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini(GeminiModel),
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Gemini2_0Flash,
    Gemini2_0FlashLite,
    Gemini1_5Flash,
    Gemini1_5Pro,
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}

/// Parses the public model id (`"gemini-2.0-flash"`). Unknown ids become
/// [`Model::Custom`] so new models work without a release.
impl From<&str> for Model {
    fn from(value: &str) -> Self {
        match value {
            "gemini-2.0-flash" => GeminiModel::Gemini2_0Flash.into(),
            "gemini-2.0-flash-lite" => GeminiModel::Gemini2_0FlashLite.into(),
            "gemini-1.5-flash" => GeminiModel::Gemini1_5Flash.into(),
            "gemini-1.5-pro" => GeminiModel::Gemini1_5Pro.into(),
            other => Model::Custom(other.to_owned()),
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::Gemini(model) => write!(f, "{model:?}"),
            Model::Custom(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_variants() {
        assert_eq!(
            Model::from("gemini-2.0-flash"),
            Model::Gemini(GeminiModel::Gemini2_0Flash)
        );
        assert_eq!(
            Model::from("gemini-1.5-pro"),
            Model::Gemini(GeminiModel::Gemini1_5Pro)
        );
    }

    #[test]
    fn unknown_ids_pass_through() {
        assert_eq!(
            Model::from("gemini-exp-1206"),
            Model::Custom("gemini-exp-1206".into())
        );
    }
}
