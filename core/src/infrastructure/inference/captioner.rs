use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::domain::{common::entities::app_errors::CoreError, ingredient::ports::ImageCaptioner};

/// Hosted image-captioning model reached through the Hugging Face Inference
/// API. Raw image bytes go in, one free-form caption comes out.
#[derive(Debug, Clone)]
pub struct HfImageCaptioner {
    endpoint: String,
    model_name: String,
    api_token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CaptionOutput {
    generated_text: String,
}

impl HfImageCaptioner {
    pub fn new(endpoint: String, model_name: String, api_token: String) -> Self {
        Self {
            endpoint,
            model_name,
            api_token,
            client: Client::new(),
        }
    }

    async fn call_inference_api(&self, image_data: Vec<u8>) -> Result<Vec<CaptionOutput>, CoreError> {
        let url = format!("{}/models/{}", self.endpoint, self.model_name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image_data)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Captioning request failed: {}", e);
                CoreError::ExternalServiceError(format!("Captioning model error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Captioning API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Captioning model returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse captioning response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse captioning response: {}", e))
        })
    }
}

impl ImageCaptioner for HfImageCaptioner {
    async fn caption(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        let outputs = self.call_inference_api(image_data).await?;

        outputs
            .first()
            .map(|output| output.generated_text.trim().to_string())
            .ok_or_else(|| CoreError::ExternalServiceError("No caption returned".to_string()))
    }
}
