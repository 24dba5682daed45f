use std::sync::Arc;

use salesdash_core::AskRequest;
use salesdash_llm::{build_prompt, TextGenerator};

use crate::ServiceError;

/// Server side of the ask endpoint: validate, build the prompt, generate once.
pub struct AskService {
    generator: Arc<dyn TextGenerator>,
}

impl AskService {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Returns the model's answer verbatim.
    ///
    /// # Errors
    /// `MissingInput` when `user_input` is absent or empty (no downstream
    /// call is made); `DownstreamGenerationFailure` when generation fails.
    pub async fn ask(&self, request: &AskRequest) -> Result<String, ServiceError> {
        let Some(question) = request.user_input.as_deref().filter(|q| !q.is_empty()) else {
            tracing::info!("ask request without user input");
            return Err(ServiceError::MissingInput);
        };

        let prompt = build_prompt(question, request.dashboard_data_summary.as_deref());
        tracing::debug!(prompt_len = prompt.len(), "sending prompt to generator");

        let answer = self
            .generator
            .generate(&prompt)
            .await
            .map_err(ServiceError::DownstreamGenerationFailure)?;
        tracing::info!(answer_len = answer.len(), "received generated answer");
        Ok(answer)
    }
}
