use crate::application::http::{
    health::HealthApiDoc, ingredient::router::IngredientApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecipeSnap API"
    ),
    nest(
        (path = "", api = HealthApiDoc),
        (path = "", api = IngredientApiDoc),
        (path = "", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;
