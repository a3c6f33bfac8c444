use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::TextGenerator};

/// Hosted causal-language model reached through the Hugging Face Inference
/// API text-generation task.
#[derive(Debug, Clone)]
pub struct HfTextGenerator {
    endpoint: String,
    model_name: String,
    api_token: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repetition_penalty: f32,
    return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 1024,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 50,
            repetition_penalty: 1.1,
            return_full_text: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerationOutput {
    generated_text: String,
}

impl HfTextGenerator {
    pub fn new(endpoint: String, model_name: String, api_token: String) -> Self {
        Self {
            endpoint,
            model_name,
            api_token,
            client: Client::new(),
        }
    }

    async fn call_inference_api(
        &self,
        request: GenerationRequest,
    ) -> Result<Vec<GenerationOutput>, CoreError> {
        let url = format!("{}/models/{}", self.endpoint, self.model_name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Generation request failed: {}", e);
                CoreError::ExternalServiceError(format!("Generation model error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Generation API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Generation model returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse generation response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse generation response: {}", e))
        })
    }
}

impl TextGenerator for HfTextGenerator {
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        let request = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters::default(),
        };

        let outputs = self.call_inference_api(request).await?;

        outputs
            .first()
            .map(|output| output.generated_text.trim().to_string())
            .ok_or_else(|| CoreError::ExternalServiceError("No generation returned".to_string()))
    }
}
