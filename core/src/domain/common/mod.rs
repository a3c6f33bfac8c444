pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeSnapConfig {
    pub inference: InferenceConfig,
}

/// Settings for the hosted model backends. When `api_token` is absent the
/// stub backends are selected instead of the Hugging Face ones.
#[derive(Clone, Debug)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub api_token: Option<String>,
    pub caption_model: String,
    pub detection_model: String,
    pub generation_model: String,
    pub detection_confidence_threshold: f32,
}
