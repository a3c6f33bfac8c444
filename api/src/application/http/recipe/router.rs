use super::handlers::{
    full_analysis::{__path_full_analysis, full_analysis},
    generate_recipes::{__path_generate_recipes, generate_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, full_analysis))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-recipes", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/full-analysis", state.args.server.root_path),
            post(full_analysis),
        )
}
