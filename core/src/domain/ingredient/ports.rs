use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Detection, IngredientAnalysis},
        value_objects::AnalyzeImageInput,
    },
};

/// Image-to-text collaborator producing one free-form caption.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCaptioner: Send + Sync {
    fn caption(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Object-detection collaborator. An empty result is a valid
/// "no objects found" outcome.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectDetector: Send + Sync {
    fn detect(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<Detection>, CoreError>> + Send;
}

/// Service trait for identifying ingredients in an image.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientAnalysisService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<IngredientAnalysis, CoreError>> + Send;
}
