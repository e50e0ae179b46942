use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Applied when the caller does not pick a timeout. Landing pages are long
/// completions, so this is generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Minimal HTTP client for Gemini's *generateContent* endpoint.
///
/// * Non-streaming only (one request ▶ one response), never retried.
/// * The API key travels as the `key` query parameter.
/// * Shares a single `reqwest::Client`, so cloning `GeminiClient` is cheap.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("base", &self.base)
            .finish()
    }
}

impl GeminiClient {
    /// Wrap a configured `reqwest::Client` (timeout, proxy, TLS are the
    /// caller's business). `base_url` defaults to [`DEFAULT_BASE_URL`].
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Result<Self, GeminiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Ok(Self {
            api_key,
            http,
            base: base.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform one `generateContent` call for `model` (e.g. `"gemini-2.0-flash"`).
    ///
    /// The body is decoded in two steps so the two failure modes stay
    /// distinct: bytes that are not JSON at all yield [`GeminiError::Malformed`],
    /// JSON that does not fit [`GenerateContentResponse`] yields
    /// [`GeminiError::Shape`].
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!("{}/models/{model}:generateContent", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%model, base = %self.base, "sending generateContent request");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|err| GeminiError::Http(err.without_url()))?;

        let status = resp.status();

        #[cfg(feature = "tracing")]
        tracing::debug!(%status, "generateContent responded");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|err| GeminiError::Http(err.without_url()))?;

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(GeminiError::Malformed)?;
        let parsed: GenerateContentResponse = serde_json::from_value(value)
            .map_err(|err| GeminiError::Shape(format!("unexpected JSON layout: {err}")))?;

        Ok(parsed)
    }
}
