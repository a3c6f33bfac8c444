use serde::Deserialize;
use thiserror::Error;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Error)]
enum RecipeParseError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response JSON is not an object")]
    NotAnObject,
}

fn default_recipe_name() -> String {
    "Unnamed Recipe".to_string()
}

/// Lenient wire shape of one recipe as emitted by the generator. Missing
/// always-present fields are defaulted; wrong-shaped fields fail
/// deserialization and surface as a parse-wide failure.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    #[serde(default = "default_recipe_name")]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    prep_time: Option<String>,
    cook_time: Option<String>,
    servings: Option<u32>,
    difficulty: Option<String>,
    cuisine_type: Option<String>,
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            ingredients: raw.ingredients,
            instructions: raw.instructions,
            prep_time: raw.prep_time,
            cook_time: raw.cook_time,
            servings: raw.servings,
            difficulty: raw.difficulty,
            cuisine_type: raw.cuisine_type,
        }
    }
}

/// Parse the text generator's free-form reply into recipes.
///
/// Total function: any failure — no JSON found, malformed JSON, wrong-shaped
/// fields — discards partial results and yields the single fallback recipe.
/// It never returns an error to its caller.
pub fn parse_recipe_response(response: &str) -> Vec<Recipe> {
    match try_parse_recipes(response) {
        Ok(recipes) => recipes,
        Err(error) => {
            tracing::error!("Failed to parse recipe response: {}", error);
            tracing::debug!("Response was: {}", response);
            vec![Recipe::fallback()]
        }
    }
}

fn try_parse_recipes(response: &str) -> Result<Vec<Recipe>, RecipeParseError> {
    let document = locate_json_document(response)?;
    let object = document.as_object().ok_or(RecipeParseError::NotAnObject)?;

    // A parseable document without a `recipes` array yields no recipes; only
    // failures trigger the fallback.
    let Some(recipes) = object.get("recipes") else {
        return Ok(Vec::new());
    };

    let raw_recipes: Vec<RawRecipe> = serde_json::from_value(recipes.clone())?;
    Ok(raw_recipes.into_iter().map(Recipe::from).collect())
}

/// Best-effort JSON location. The span from the first `{` to the last `}`
/// tolerates models that wrap JSON in explanatory prose; when that span does
/// not parse, the whole reply is tried as-is. A heuristic, not a guaranteed
/// JSON locator.
fn locate_json_document(response: &str) -> Result<serde_json::Value, serde_json::Error> {
    if let Some(candidate) = brace_span(response) {
        if let Ok(document) = serde_json::from_str(candidate) {
            return Ok(document);
        }
    }

    serde_json::from_str(response)
}

fn brace_span(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (start < end).then(|| &response[start..=end])
}
