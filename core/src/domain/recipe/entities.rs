use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One generated recipe. `name`, `description`, `ingredients` and
/// `instructions` are always present; the remaining fields stay absent when
/// the generator omits them. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<u32>,
    pub difficulty: Option<String>,
    pub cuisine_type: Option<String>,
}

impl Recipe {
    /// The single deterministic recipe substituted whenever the generator's
    /// reply cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            name: "Simple Mixed Dish".to_string(),
            description: "A simple dish using your available ingredients".to_string(),
            ingredients: vec![
                "Your available ingredients".to_string(),
                "Salt".to_string(),
                "Pepper".to_string(),
                "Oil".to_string(),
            ],
            instructions: vec![
                "Prepare all ingredients".to_string(),
                "Cook according to your preference".to_string(),
                "Season to taste".to_string(),
                "Serve hot".to_string(),
            ],
            prep_time: Some("10 minutes".to_string()),
            cook_time: Some("15 minutes".to_string()),
            servings: Some(2),
            difficulty: Some("Easy".to_string()),
            cuisine_type: Some("Home Cooking".to_string()),
        }
    }
}
