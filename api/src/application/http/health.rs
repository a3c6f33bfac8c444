use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(paths(health_check))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "RecipeSnap API is running!".to_string(),
        status: "healthy".to_string(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let path = if root_path.is_empty() {
        "/".to_string()
    } else {
        format!("{}/", root_path)
    };

    Router::new().route(&path, get(health_check))
}
