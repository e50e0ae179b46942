//! Prompt helpers for the landing page generator.
//!
//! * [`builder::PromptBuilder`] – fluent markdown assembly.
//! * [`landing::LandingPagePrompt`] – the fixed instructions around a user
//!   description, plus the [`landing::build`] shortcut.
pub mod builder;
pub mod landing;

pub use landing::{LandingPagePrompt, build};
