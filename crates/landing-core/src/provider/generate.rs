use std::{future::Future, pin::Pin};

use tokio_util::sync::CancellationToken;

use crate::{error::Result, model::Model, template::Prompt};

/// Boxed future returned by [`GenerationProvider::generate`].
pub type GenerationFuture<'p> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>;

/// A **backend** turns a prompt into a network call to a concrete provider
/// and extracts the generated text from the reply.
///
/// The trait is intentionally minimal:
///
/// * **One method** – `generate`, which performs a *single* non-streaming
///   round-trip.  No retries happen behind the caller's back.
/// * **Object safe** – the method returns a [`Pin<Box<dyn Future>>`] so the
///   presenter can hold an `Arc<dyn GenerationProvider>` without pulling in
///   `async_trait`.
///
/// The `cancel` token lets callers abandon an in-flight call.  Back-ends
/// must resolve to [`GenerationError::Cancelled`](crate::error::GenerationError::Cancelled)
/// once it fires, and must not start a request if it already has.
pub trait GenerationProvider: Send + Sync {
    fn generate<'p>(
        &'p self,
        params: GenerateParameters,
        cancel: CancellationToken,
    ) -> GenerationFuture<'p>;
}

#[derive(Debug, Clone)]
pub struct GenerateParameters {
    pub prompt: Prompt,
    pub model: Model,
}

impl GenerateParameters {
    pub fn new(prompt: Prompt, model: Model) -> Self {
        Self { prompt, model }
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Override the model, e.g. from runtime configuration.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }
}
