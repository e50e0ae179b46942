//! Provider-agnostic building blocks of the landing page generator.
//!
//! * [`template`] – the [`Prompt`](template::Prompt) text and the trait that
//!   produces it.
//! * [`provider`] – the [`GenerationProvider`](provider::GenerationProvider)
//!   seam implemented by back-end crates.
//! * [`session`] – per-session result storage and the render decision.
//! * [`error`] – the single error type every back-end converts into.
pub mod client;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;
pub mod template;

pub use client::LandingClient;
