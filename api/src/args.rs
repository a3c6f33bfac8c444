use clap::Parser;
use recipesnap_core::domain::common::{InferenceConfig, RecipeSnapConfig};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "recipesnap-api",
    about = "AI cooking assistant that identifies ingredients in a photo and suggests recipes"
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub inference: InferenceArgs,

    /// Emit logs as JSON.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8001)]
    pub port: u16,

    /// Prefix prepended to every route.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InferenceArgs {
    /// Base URL of the hosted model inference service.
    #[arg(
        long,
        env = "INFERENCE_ENDPOINT",
        default_value = "https://api-inference.huggingface.co"
    )]
    pub endpoint: String,

    /// API token for the hosted inference service. When unset, stub model
    /// backends answer with canned data.
    #[arg(long, env = "HF_API_TOKEN")]
    pub api_token: Option<String>,

    #[arg(
        long,
        env = "CAPTION_MODEL",
        default_value = "nlpconnect/vit-gpt2-image-captioning"
    )]
    pub caption_model: String,

    #[arg(
        long,
        env = "DETECTION_MODEL",
        default_value = "facebook/detr-resnet-50"
    )]
    pub detection_model: String,

    #[arg(
        long,
        env = "GENERATION_MODEL",
        default_value = "mistralai/Mistral-7B-Instruct-v0.1"
    )]
    pub generation_model: String,

    /// Detections scoring below this threshold are discarded by the detector
    /// backend.
    #[arg(long, env = "DETECTION_CONFIDENCE_THRESHOLD", default_value_t = 0.5)]
    pub detection_confidence_threshold: f32,
}

impl From<Args> for RecipeSnapConfig {
    fn from(args: Args) -> Self {
        Self {
            inference: InferenceConfig {
                endpoint: args.inference.endpoint,
                api_token: args.inference.api_token,
                caption_model: args.inference.caption_model,
                detection_model: args.inference.detection_model,
                generation_model: args.inference.generation_model,
                detection_confidence_threshold: args.inference.detection_confidence_threshold,
            },
        }
    }
}
