use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::{ImageCaptioner, ObjectDetector},
    recipe::{
        entities::Recipe,
        parser::parse_recipe_response,
        ports::{RecipeGenerationService, TextGenerator},
        prompt::build_recipe_prompt,
        value_objects::GenerateRecipesInput,
    },
};

impl<C, D, G> RecipeGenerationService for Service<C, D, G>
where
    C: ImageCaptioner,
    D: ObjectDetector,
    G: TextGenerator,
{
    async fn generate_recipes(&self, input: GenerateRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        // Degenerate input is rejected before any model invocation.
        if input.ingredients.is_empty() {
            return Err(CoreError::EmptyIngredients);
        }

        let prompt = build_recipe_prompt(&input.ingredients);
        tracing::info!(
            "Generating recipes for ingredients: {}",
            input.ingredients.join(", ")
        );

        let response = self.generator.generate(prompt).await?;
        tracing::debug!("Generator response: {}", response);

        let recipes = parse_recipe_response(&response);
        tracing::info!("Generated {} recipes", recipes.len());

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ingredient::{
            catalog::IngredientCatalog,
            ports::{MockImageCaptioner, MockObjectDetector},
        },
        recipe::ports::MockTextGenerator,
    };

    fn service(
        generator: MockTextGenerator,
    ) -> Service<MockImageCaptioner, MockObjectDetector, MockTextGenerator> {
        Service::new(
            MockImageCaptioner::new(),
            MockObjectDetector::new(),
            generator,
            IngredientCatalog::new().unwrap(),
        )
    }

    fn input(ingredients: &[&str]) -> GenerateRecipesInput {
        GenerateRecipesInput {
            ingredients: ingredients.iter().map(ToString::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn rejects_empty_ingredient_list_before_generation() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().times(0);

        let result = service(generator).generate_recipes(input(&[])).await;

        assert!(matches!(result, Err(CoreError::EmptyIngredients)));
    }

    #[tokio::test]
    async fn prompts_with_the_joined_ingredient_list() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt| prompt.contains("Available ingredients: Tomato, Basil"))
            .returning(|_| {
                Box::pin(async {
                    Ok(r#"{"recipes": [{"name": "Caprese", "description": "", "ingredients": [], "instructions": []}]}"#.to_string())
                })
            });

        let recipes = service(generator)
            .generate_recipes(input(&["Tomato", "Basil"]))
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Caprese");
    }

    #[tokio::test]
    async fn propagates_generator_failure() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("model offline".to_string())) })
        });

        let result = service(generator).generate_recipes(input(&["Rice"])).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn unparseable_reply_yields_the_fallback_recipe() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Box::pin(async { Ok("I cannot help with that.".to_string()) }));

        let recipes = service(generator)
            .generate_recipes(input(&["Rice"]))
            .await
            .unwrap();

        assert_eq!(recipes, vec![Recipe::fallback()]);
    }
}
