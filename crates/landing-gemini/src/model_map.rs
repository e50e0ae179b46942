use std::borrow::Cow;

use landing_core::model::{GeminiModel, Model};

pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
pub const GEMINI_2_0_FLASH_LITE: &str = "gemini-2.0-flash-lite";
pub const GEMINI_1_5_FLASH: &str = "gemini-1.5-flash";
pub const GEMINI_1_5_PRO: &str = "gemini-1.5-pro";

/// Translate a workspace [`Model`] into the id used in the endpoint path.
///
/// Custom names are accepted as long as they are a single path segment.
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    let gemini = match model {
        Model::Gemini(gemini) => gemini,
        Model::Custom(custom) => {
            let valid = !custom.is_empty()
                && custom
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));
            return valid.then(|| Cow::Owned(custom.clone()));
        }
    };

    let id = match gemini {
        GeminiModel::Gemini2_0Flash => GEMINI_2_0_FLASH,
        GeminiModel::Gemini2_0FlashLite => GEMINI_2_0_FLASH_LITE,
        GeminiModel::Gemini1_5Flash => GEMINI_1_5_FLASH,
        GeminiModel::Gemini1_5Pro => GEMINI_1_5_PRO,
    };
    Some(id.into())
}

/// `true` when the adapter can build an endpoint path for `model`.
pub fn supports_model(model: &Model) -> bool {
    map_model(model).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_models_map_to_public_ids() {
        assert_eq!(
            map_model(&GeminiModel::Gemini2_0Flash.into()).as_deref(),
            Some("gemini-2.0-flash")
        );
        assert_eq!(
            map_model(&GeminiModel::Gemini1_5Pro.into()).as_deref(),
            Some("gemini-1.5-pro")
        );
    }

    #[test]
    fn custom_names_must_be_a_single_path_segment() {
        assert_eq!(
            map_model(&Model::Custom("gemini-2.5-pro-preview".into())).as_deref(),
            Some("gemini-2.5-pro-preview")
        );
        assert_eq!(map_model(&Model::Custom("../admin".into())), None);
        assert_eq!(map_model(&Model::Custom(String::new())), None);
        assert!(!supports_model(&Model::Custom("models/x".into())));
        assert!(supports_model(&GeminiModel::Gemini1_5Flash.into()));
    }
}
