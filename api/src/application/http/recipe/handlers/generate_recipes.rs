use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use recipesnap_core::domain::recipe::{
    entities::Recipe, ports::RecipeGenerationService, value_objects::GenerateRecipesInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub recipes: Vec<Recipe>,
    pub ingredients_used: Vec<String>,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/generate-recipes",
    tag = "recipes",
    summary = "Generate recipes from an ingredient list",
    description = "Prompts the text-generation model with the given ingredients and returns the parsed recipes",
    request_body = Vec<String>,
    responses(
        (status = 200, body = RecipeResponse),
        (status = 400, description = "Empty ingredient list")
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    Json(ingredients): Json<Vec<String>>,
) -> Result<Response<RecipeResponse>, ApiError> {
    if ingredients.is_empty() {
        return Err(ApiError::BadRequest("No ingredients provided".to_string()));
    }

    let recipes = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients: ingredients.clone(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse {
        recipes,
        ingredients_used: ingredients,
        message: "Recipes generated successfully".to_string(),
    }))
}
