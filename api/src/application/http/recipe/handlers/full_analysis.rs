use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    upload::read_image_upload,
};
use recipesnap_core::domain::{
    ingredient::{ports::IngredientAnalysisService, value_objects::AnalyzeImageInput},
    recipe::{entities::Recipe, ports::RecipeGenerationService, value_objects::GenerateRecipesInput},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FullAnalysisResponse {
    pub ingredients: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/full-analysis",
    tag = "recipes",
    summary = "Identify ingredients in a photo and generate recipes for them",
    description = "Complete workflow: image analysis followed by recipe generation. Recipe generation is skipped when no ingredients are detected",
    responses(
        (status = 200, body = FullAnalysisResponse),
        (status = 400, description = "Upload is not an image")
    )
)]
pub async fn full_analysis(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<FullAnalysisResponse>, ApiError> {
    let image_data = read_image_upload(&mut multipart).await?;

    let analysis = state
        .service
        .analyze_image(AnalyzeImageInput { image_data })
        .await
        .map_err(ApiError::from)?;

    // No ingredients means nothing to prompt with; skip generation entirely.
    if analysis.ingredients.is_empty() {
        return Ok(Response::OK(FullAnalysisResponse {
            ingredients: Vec::new(),
            recipes: Vec::new(),
            message: "No ingredients detected in the image".to_string(),
        }));
    }

    let recipes = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients: analysis.ingredients.clone(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FullAnalysisResponse {
        ingredients: analysis.ingredients,
        recipes,
        message: "Analysis completed successfully".to_string(),
    }))
}
