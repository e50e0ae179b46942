//! Runtime configuration: command line flags with environment fallbacks.
//!
//! `.env` is loaded before parsing (see `main.rs`), so every `env = …`
//! below can also come from that file.  The API key itself is not a flag:
//! it is read from `GEMINI_API_KEY` by the adapter builder.

use std::{net::SocketAddr, time::Duration};

use clap::Parser;
use landing_core::model::Model;
use landing_gemini::supports_model;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    #[error("session idle time must be at least one second")]
    ZeroSessionIdle,

    #[error("model name must not be empty")]
    EmptyModel,

    #[error("model `{0}` is not a valid Gemini model id")]
    UnsupportedModel(String),
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Describe a landing page, get a live preview")]
pub struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, env = "LANDING_ADDR", default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,

    /// Gemini model id used for generation
    #[arg(long, env = "LANDING_MODEL", default_value = "gemini-2.0-flash")]
    pub model: String,

    /// Whole-request timeout for one generation call, in seconds
    #[arg(long, env = "LANDING_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Forget a session after this many idle seconds
    #[arg(long, env = "LANDING_SESSION_IDLE_SECS", default_value_t = 3600)]
    pub session_idle_secs: u64,

    /// Upper bound on concurrently tracked sessions
    #[arg(long, env = "LANDING_MAX_SESSIONS", default_value_t = 10_000)]
    pub max_sessions: u64,

    /// Override the Gemini REST base URL (e.g. for a local mock)
    #[arg(long, env = "GEMINI_BASE_URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Check values clap cannot express. Call before wiring anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.session_idle_secs == 0 {
            return Err(ConfigError::ZeroSessionIdle);
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if !supports_model(&self.model()) {
            return Err(ConfigError::UnsupportedModel(self.model.clone()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    pub fn model(&self) -> Model {
        Model::from(self.model.trim())
    }
}
