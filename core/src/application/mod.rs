use crate::{
    domain::{
        common::{RecipeSnapConfig, services::Service},
        ingredient::catalog::IngredientCatalog,
    },
    infrastructure::inference::{
        CaptionerBackend, DetectorBackend, GeneratorBackend, captioner::HfImageCaptioner,
        detector::HfObjectDetector, generator::HfTextGenerator,
        stub::{StubImageCaptioner, StubObjectDetector, StubTextGenerator},
    },
};

pub type RecipeSnapService = Service<CaptionerBackend, DetectorBackend, GeneratorBackend>;

/// Assembles the service with its model backends. The hosted Hugging Face
/// backends are selected when an API token is configured; otherwise every
/// collaborator falls back to its stub and the service answers with canned
/// data.
pub fn create_service(config: RecipeSnapConfig) -> Result<RecipeSnapService, anyhow::Error> {
    let inference = config.inference;
    let catalog = IngredientCatalog::new()?;

    let (captioner, detector, generator) = match inference.api_token {
        Some(api_token) => (
            CaptionerBackend::HuggingFace(HfImageCaptioner::new(
                inference.endpoint.clone(),
                inference.caption_model,
                api_token.clone(),
            )),
            DetectorBackend::HuggingFace(HfObjectDetector::new(
                inference.endpoint.clone(),
                inference.detection_model,
                api_token.clone(),
                inference.detection_confidence_threshold,
            )),
            GeneratorBackend::HuggingFace(HfTextGenerator::new(
                inference.endpoint,
                inference.generation_model,
                api_token,
            )),
        ),
        None => {
            tracing::warn!("No inference API token configured, using stub model backends");
            (
                CaptionerBackend::Stub(StubImageCaptioner),
                DetectorBackend::Stub(StubObjectDetector),
                GeneratorBackend::Stub(StubTextGenerator::new()?),
            )
        }
    };

    Ok(Service::new(captioner, detector, generator, catalog))
}
