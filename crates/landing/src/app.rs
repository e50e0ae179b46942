use std::sync::Arc;

use landing_core::{LandingClient, error::GenerationError};
use landing_gemini::{API_KEY_ENV, GeminiAdapterBuilder};
use tracing::{info, warn};

use crate::{
    config::Cli,
    page::{PageError, PageRenderer},
    presenter::Presenter,
    sessions::SessionStore,
    web::AppState,
};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Backend(#[from] GenerationError),

    #[error(transparent)]
    Page(#[from] PageError),
}

/// Wire the Gemini backend for `cli`.
///
/// A missing API key is not fatal: the server still starts and every
/// generation attempt reports the configuration error to the user.
pub fn build_presenter(cli: &Cli, builder: GeminiAdapterBuilder) -> Result<Presenter, StartupError> {
    let mut builder = builder.with_timeout(cli.timeout());
    if let Some(base) = &cli.base_url {
        builder = builder.with_base_url(base.clone());
    }

    match builder.build() {
        Ok(adapter) => {
            info!(model = %cli.model, timeout_secs = cli.timeout_secs, "Gemini backend ready");
            let client = LandingClient::new(adapter).with_model_override(cli.model());
            Ok(Presenter::new(Arc::new(client)))
        }
        Err(GenerationError::MissingCredential) => {
            warn!("{API_KEY_ENV} is not set; generation requests will fail until it is configured");
            Ok(Presenter::without_credential())
        }
        Err(err) => Err(err.into()),
    }
}

/// Everything the router needs, built from configuration and the process
/// environment.
pub fn build_state(cli: &Cli) -> Result<AppState, StartupError> {
    let presenter = build_presenter(cli, GeminiAdapterBuilder::new_from_env())?;
    let sessions = SessionStore::new(cli.session_idle(), cli.max_sessions);
    Ok(AppState::new(presenter, sessions, PageRenderer::new()?))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn missing_key_starts_without_credential() {
        let cli = Cli::try_parse_from(["landing"]).unwrap();
        let presenter = build_presenter(&cli, GeminiAdapterBuilder::new()).unwrap();
        assert!(!presenter.has_credential());
    }

    #[test]
    fn present_key_wires_the_backend() {
        let cli = Cli::try_parse_from(["landing", "--base-url", "http://127.0.0.1:1/v1beta"]).unwrap();
        let presenter =
            build_presenter(&cli, GeminiAdapterBuilder::new().with_api_key("k")).unwrap();
        assert!(presenter.has_credential());
    }
}
