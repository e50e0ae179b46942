//! Generic, lightweight client that executes a [`PromptTemplate`] against a
//! single concrete back-end.
//!
//! The client is **generic over the backend type `B`**, so swapping the
//! Gemini adapter for a scripted test double needs no dynamic dispatch in
//! user code:
//!
//! ```rust
//! use landing_core::{LandingClient, provider::*, template::*, model::*};
//! use tokio_util::sync::CancellationToken;
//!
//! struct Echo;
//!
//! impl GenerationProvider for Echo {
//!     fn generate<'p>(&'p self, params: GenerateParameters, _: CancellationToken)
//!         -> GenerationFuture<'p>
//!     {
//!         Box::pin(async move { Ok(params.prompt.into_inner()) })
//!     }
//! }
//!
//! # fn main() {
//! let client = LandingClient::new(Echo);
//! # let _ = client;
//! # }
//! ```
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    error::Result,
    model::Model,
    provider::{GenerateParameters, GenerationFuture, GenerationProvider},
    template::PromptTemplate,
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct LandingClient<B> {
    backend: Arc<B>,
    model_override: Option<Model>,
}

impl<B> Clone for LandingClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model_override: self.model_override.clone(),
        }
    }
}

impl<B> LandingClient<B>
where
    B: GenerationProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            model_override: None,
        }
    }

    /// Serve every request with `model`, ignoring the template's own choice.
    pub fn with_model_override(mut self, model: Model) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Access the underlying backend (e.g. to inspect provider settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render `template` and send it to the backend.
    pub async fn generate_template<P>(&self, template: P, cancel: CancellationToken) -> Result<String>
    where
        P: PromptTemplate,
    {
        let params = GenerateParameters::new(template.into_prompt(), P::MODEL);
        self.generate(params, cancel).await
    }
}

impl<B: GenerationProvider> GenerationProvider for LandingClient<B> {
    fn generate<'p>(
        &'p self,
        params: GenerateParameters,
        cancel: CancellationToken,
    ) -> GenerationFuture<'p> {
        let params = match &self.model_override {
            Some(model) => params.with_model(model.clone()),
            None => params,
        };
        self.backend.generate(params, cancel)
    }
}
