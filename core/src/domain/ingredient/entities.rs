use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One labeled, confidence-scored, spatially located object reported by the
/// object-detection collaborator. Read-only within the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
    #[schema(value_type = Vec<f32>)]
    pub bounding_box: [f32; 4],
}

/// Outcome of analyzing one image: the raw caption, the raw detections, and
/// the aggregated ingredient list derived from both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    pub caption: String,
    pub detections: Vec<Detection>,
    pub ingredients: Vec<String>,
}
