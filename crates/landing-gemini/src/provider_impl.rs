use std::sync::Arc;

use landing_core::{
    error::GenerationError,
    provider::{GenerateParameters, GenerationFuture, GenerationProvider},
};
use tokio_util::sync::CancellationToken;

use crate::{GeminiAdapter, api_v1::GenerateContentRequest, model_map::map_model};

impl GenerationProvider for GeminiAdapter {
    fn generate<'p>(
        &'p self,
        params: GenerateParameters,
        cancel: CancellationToken,
    ) -> GenerationFuture<'p> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(params.model())
                .ok_or_else(|| GenerationError::ModelNotSupported(params.model().to_string()))?;

            if cancel.is_cancelled() {
                return Err(GenerationError::Cancelled);
            }

            let request = GenerateContentRequest::from_text(params.prompt.into_inner());

            #[cfg(feature = "tracing")]
            tracing::info!(%model, prompt_len = request.contents[0].parts[0].text.len(), "generating");

            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
                response = client.generate_content(&model, &request) => response?,
            };

            #[cfg(feature = "tracing")]
            if let Some(usage) = response.usage_metadata {
                tracing::debug!(
                    prompt_tokens = ?usage.prompt_token_count,
                    candidate_tokens = ?usage.candidates_token_count,
                    "token usage"
                );
            }

            Ok(response.into_text()?)
        })
    }
}
