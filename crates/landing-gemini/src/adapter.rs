use std::{env, sync::Arc, time::Duration};

use landing_core::error::{GenerationError, Result};

use crate::{
    client::{DEFAULT_TIMEOUT, GeminiClient},
    error::GeminiError,
};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Thin wrapper that wires the HTTP client [`GeminiClient`] into a value that
/// implements [`landing_core::provider::GenerationProvider`].
///
/// It owns a shareable, connection-pooled `reqwest::Client` and exposes no
/// further methods: all user-facing functionality sits on the provider trait
/// or on [`landing_core::LandingClient`] once the adapter is plugged in.
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    pub(crate) client: Arc<GeminiClient>,
}

impl GeminiAdapter {
    pub fn client(&self) -> &GeminiClient {
        &self.client
    }
}

/// Builder for [`GeminiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use landing_gemini::GeminiAdapterBuilder;
///
/// let backend = GeminiAdapterBuilder::new_from_env()
///     .build()
///     .expect("GEMINI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl GeminiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `GEMINI_API_KEY`
    /// environment variable.
    ///
    /// Never fails. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whole-request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`GenerationError::MissingCredential`] – if the API key is absent or blank.
    /// * [`GenerationError::TransportFailure`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<GeminiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|err| GeminiError::Http(err.without_url()))?;
        let client = GeminiClient::with_http(api_key, http, self.base_url)?;

        Ok(GeminiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_credential_error() {
        let err = GeminiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential));
    }

    #[test]
    fn blank_key_is_a_credential_error() {
        let err = GeminiAdapterBuilder::new()
            .with_api_key("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingCredential));
    }

    #[test]
    fn base_url_override_is_normalised() {
        let adapter = GeminiAdapterBuilder::new()
            .with_api_key("k")
            .with_base_url("http://127.0.0.1:9999/v1beta/")
            .build()
            .unwrap();
        assert_eq!(adapter.client().base_url(), "http://127.0.0.1:9999/v1beta");
    }
}
