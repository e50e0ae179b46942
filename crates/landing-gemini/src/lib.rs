//! Gemini back-end for the landing page generator.
//!
//! [`GeminiAdapterBuilder`] produces a [`GeminiAdapter`], which implements
//! [`landing_core::provider::GenerationProvider`] on top of the
//! `generateContent` REST endpoint.
mod adapter;
pub mod api_v1;
mod client;
pub mod error;
mod model_map;
mod provider_impl;

pub use adapter::{API_KEY_ENV, GeminiAdapter, GeminiAdapterBuilder};
pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GeminiClient};
pub use model_map::supports_model;
