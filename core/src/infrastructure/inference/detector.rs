use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Detection, ports::ObjectDetector},
};

/// Hosted object-detection model reached through the Hugging Face Inference
/// API. Detections below the configured confidence threshold are dropped
/// here, before the domain filter ever sees them.
#[derive(Debug, Clone)]
pub struct HfObjectDetector {
    endpoint: String,
    model_name: String,
    api_token: String,
    confidence_threshold: f32,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct DetectionOutput {
    score: f32,
    label: String,
    #[serde(rename = "box")]
    bounding_box: BoundingBoxOutput,
}

#[derive(Debug, Deserialize)]
struct BoundingBoxOutput {
    xmin: f32,
    ymin: f32,
    xmax: f32,
    ymax: f32,
}

impl HfObjectDetector {
    pub fn new(
        endpoint: String,
        model_name: String,
        api_token: String,
        confidence_threshold: f32,
    ) -> Self {
        Self {
            endpoint,
            model_name,
            api_token,
            confidence_threshold,
            client: Client::new(),
        }
    }

    async fn call_inference_api(
        &self,
        image_data: Vec<u8>,
    ) -> Result<Vec<DetectionOutput>, CoreError> {
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
                tracing::error!("Detection request failed: {}", e);
                CoreError::ExternalServiceError(format!("Detection model error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Detection API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Detection model returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse detection response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse detection response: {}", e))
        })
    }
}

impl ObjectDetector for HfObjectDetector {
    async fn detect(&self, image_data: Vec<u8>) -> Result<Vec<Detection>, CoreError> {
        let outputs = self.call_inference_api(image_data).await?;

        Ok(outputs
            .into_iter()
            .filter(|output| output.score >= self.confidence_threshold)
            .map(|output| Detection {
                label: output.label,
                confidence: output.score,
                bounding_box: [
                    output.bounding_box.xmin,
                    output.bounding_box.ymin,
                    output.bounding_box.xmax,
                    output.bounding_box.ymax,
                ],
            })
            .collect())
    }
}
