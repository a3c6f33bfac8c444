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
use recipesnap_core::domain::ingredient::{
    ports::IngredientAnalysisService, value_objects::AnalyzeImageInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngredientResponse {
    pub ingredients: Vec<String>,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/analyze-ingredients",
    tag = "ingredients",
    summary = "Identify ingredients in an uploaded photo",
    description = "Runs image captioning and object detection over the uploaded image and returns the catalog-matched ingredient names",
    responses(
        (status = 200, body = IngredientResponse),
        (status = 400, description = "Upload is not an image")
    )
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<IngredientResponse>, ApiError> {
    let image_data = read_image_upload(&mut multipart).await?;

    let analysis = state
        .service
        .analyze_image(AnalyzeImageInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(IngredientResponse {
        ingredients: analysis.ingredients,
        message: "Ingredients identified successfully".to_string(),
    }))
}
