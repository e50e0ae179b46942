//! # `landing` – describe a landing page, preview the generated HTML
//!
//! This crate glues the workspace together and hosts the web surface:
//!
//! | Crate              | What it provides                                                   |
//! |--------------------|--------------------------------------------------------------------|
//! | **`landing-core`** | Provider-agnostic traits, `SessionState`, `GenerationError`         |
//! | **`landing-prompt`** | The fixed landing page instructions around a user description    |
//! | **`landing-gemini`** | HTTP adapter for Gemini's `generateContent` endpoint             |
//!
//! The modules here add the [`presenter`] (one generation cycle), the
//! per-session [`sessions`] store, the server-rendered [`page`] and the axum
//! [`web`] router.
//!
//! ```rust,no_run
//! use clap::Parser;
//! use landing::{app::build_state, config::Cli, web::router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse();
//!     let app = router(build_state(&cli)?);
//!     let listener = tokio::net::TcpListener::bind(cli.addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
pub use landing_core::*;
pub use landing_gemini as gemini;
pub use landing_prompt as prompt;

pub mod app;
pub mod config;
pub mod logging;
pub mod notice;
pub mod page;
pub mod presenter;
pub mod sessions;
pub mod web;

pub use logging::init_logging;
pub use presenter::{CycleOutcome, LoadingIndicator, Presenter, PresenterState};
