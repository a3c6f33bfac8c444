pub mod captioner;
pub mod detector;
pub mod generator;
pub mod stub;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Detection,
        ports::{ImageCaptioner, ObjectDetector},
    },
    recipe::ports::TextGenerator,
};

use self::captioner::HfImageCaptioner;
use self::detector::HfObjectDetector;
use self::generator::HfTextGenerator;
use self::stub::{StubImageCaptioner, StubObjectDetector, StubTextGenerator};

/// Captioning backend bound once at startup; downstream code never branches
/// on model availability.
#[derive(Debug, Clone)]
pub enum CaptionerBackend {
    HuggingFace(HfImageCaptioner),
    Stub(StubImageCaptioner),
}

impl ImageCaptioner for CaptionerBackend {
    async fn caption(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        match self {
            CaptionerBackend::HuggingFace(captioner) => captioner.caption(image_data).await,
            CaptionerBackend::Stub(captioner) => captioner.caption(image_data).await,
        }
    }
}

/// Object-detection backend bound once at startup.
#[derive(Debug, Clone)]
pub enum DetectorBackend {
    HuggingFace(HfObjectDetector),
    Stub(StubObjectDetector),
}

impl ObjectDetector for DetectorBackend {
    async fn detect(&self, image_data: Vec<u8>) -> Result<Vec<Detection>, CoreError> {
        match self {
            DetectorBackend::HuggingFace(detector) => detector.detect(image_data).await,
            DetectorBackend::Stub(detector) => detector.detect(image_data).await,
        }
    }
}

/// Text-generation backend bound once at startup.
#[derive(Debug, Clone)]
pub enum GeneratorBackend {
    HuggingFace(HfTextGenerator),
    Stub(StubTextGenerator),
}

impl TextGenerator for GeneratorBackend {
    async fn generate(&self, prompt: String) -> Result<String, CoreError> {
        match self {
            GeneratorBackend::HuggingFace(generator) => generator.generate(prompt).await,
            GeneratorBackend::Stub(generator) => generator.generate(prompt).await,
        }
    }
}
