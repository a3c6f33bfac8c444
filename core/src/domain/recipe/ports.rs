use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, value_objects::GenerateRecipesInput},
};

/// Text-generation collaborator. Replies are free-form and may not be valid
/// JSON; the response parser is built around that unreliability.
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for generating recipes from an ingredient list.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeGenerationService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
