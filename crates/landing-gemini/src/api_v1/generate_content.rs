use serde::{Deserialize, Serialize};

use crate::error::GeminiError;

/// Body of `POST models/{model}:generateContent`.
///
/// Only the fields this service sends are modelled; everything else uses the
/// API defaults.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single-turn request carrying one text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.into() }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

/// Reply of `generateContent`.
///
/// Every level is optional: the service omits `candidates` entirely when a
/// prompt is blocked, and a candidate may carry no content.  Presence is
/// checked once, in [`Self::into_text`].
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub index: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Extract `candidates[0].content.parts[0].text`, verbatim.
    ///
    /// No trimming and no stripping of markdown fences: whatever the model
    /// wrote is returned as is.
    pub fn into_text(self) -> Result<String, GeminiError> {
        let block_reason = self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone());

        let Some(candidate) = self.candidates.and_then(|c| c.into_iter().next()) else {
            return Err(GeminiError::Shape(match block_reason {
                Some(reason) => format!("prompt was blocked: {reason}"),
                None => "response has no candidates".into(),
            }));
        };

        candidate
            .content
            .and_then(|content| content.parts)
            .and_then(|parts| parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                GeminiError::Shape(match candidate.finish_reason {
                    Some(reason) => format!("candidate has no text part (finish reason {reason})"),
                    None => "candidate has no text part".into(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn request_serialises_to_the_documented_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_text("hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [ { "parts": [ { "text": "hi" } ] } ] })
        );
    }

    #[test]
    fn first_text_part_is_returned_verbatim() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"```html\n<html></html>\n```"},{"text":"ignored"}],"role":"model"},"finishReason":"STOP"}],"usageMetadata":{"totalTokenCount":12}}"#;
        let response = decode(body);
        assert_eq!(response.usage_metadata.unwrap().total_token_count, Some(12));
        assert_eq!(response.into_text().unwrap(), "```html\n<html></html>\n```");
    }

    #[test]
    fn empty_candidates_is_a_shape_error() {
        let err = decode(r#"{"candidates":[]}"#).into_text().unwrap_err();
        assert!(matches!(err, GeminiError::Shape(ref m) if m.contains("no candidates")));
    }

    #[test]
    fn blocked_prompt_reports_reason() {
        let err = decode(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .into_text()
            .unwrap_err();
        assert!(matches!(err, GeminiError::Shape(ref m) if m.contains("SAFETY")));
    }

    #[test]
    fn candidate_without_parts_is_a_shape_error() {
        let err = decode(r#"{"candidates":[{"content":{"role":"model"},"finishReason":"MAX_TOKENS"}]}"#)
            .into_text()
            .unwrap_err();
        assert!(matches!(err, GeminiError::Shape(ref m) if m.contains("MAX_TOKENS")));
    }
}
