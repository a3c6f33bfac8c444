use std::sync::Arc;

use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use recipesnap_api::{
    application::http::server::http_server::{router, state},
    args::{Args, InferenceArgs, ServerArgs},
};
use serde_json::{Value, json};

/// Args wired to the stub backends: no API token, so no network calls.
fn stub_args() -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        inference: InferenceArgs {
            endpoint: "http://127.0.0.1:9".to_string(),
            api_token: None,
            caption_model: "caption-model".to_string(),
            detection_model: "detection-model".to_string(),
            generation_model: "generation-model".to_string(),
            detection_confidence_threshold: 0.5,
        },
        log_json: false,
    }
}

async fn server() -> TestServer {
    let state = state(Arc::new(stub_args())).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

fn image_form() -> MultipartForm {
    let image = Part::bytes(vec![0u8; 16])
        .file_name("food.jpg")
        .mime_type("image/jpeg");
    MultipartForm::new().add_part("file", image)
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let server = server().await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "RecipeSnap API is running!");
}

#[tokio::test]
async fn generate_recipes_rejects_an_empty_list() {
    let server = server().await;

    let response = server.post("/generate-recipes").json(&json!([])).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn generate_recipes_returns_recipes_for_ingredients() {
    let server = server().await;

    let response = server
        .post("/generate-recipes")
        .json(&json!(["tomato", "onion", "garlic"]))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body["ingredients_used"],
        json!(["tomato", "onion", "garlic"])
    );

    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["name"], "Quick tomato Stir Fry");
    assert_eq!(recipes[1]["name"], "Simple onion Salad");
}

#[tokio::test]
async fn analyze_ingredients_accepts_an_image_upload() {
    let server = server().await;

    let response = server
        .post("/analyze-ingredients")
        .multipart(image_form())
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ingredients"], json!(["Garlic", "Onion", "Tomato"]));
    assert_eq!(body["message"], "Ingredients identified successfully");
}

#[tokio::test]
async fn analyze_ingredients_rejects_non_image_uploads() {
    let server = server().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"not an image".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );

    let response = server.post("/analyze-ingredients").multipart(form).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn analyze_ingredients_requires_the_file_field() {
    let server = server().await;

    let form = MultipartForm::new().add_text("note", "no file here");

    let response = server.post("/analyze-ingredients").multipart(form).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn full_analysis_returns_ingredients_and_recipes() {
    let server = server().await;

    let response = server.post("/full-analysis").multipart(image_form()).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ingredients"], json!(["Garlic", "Onion", "Tomato"]));

    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["name"], "Quick Garlic Stir Fry");
}
