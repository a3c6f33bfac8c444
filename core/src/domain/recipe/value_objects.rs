#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub ingredients: Vec<String>,
}
