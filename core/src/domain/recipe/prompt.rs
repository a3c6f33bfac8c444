/// Instruction template sent to the text-generation collaborator.
/// `{ingredients}` is replaced with the comma-joined ingredient list.
pub const RECIPE_PROMPT_TEMPLATE: &str = r#"
You are a professional chef and recipe creator. Given a list of ingredients, create detailed, delicious recipes that make the best use of these ingredients.

Available ingredients: {ingredients}

Please create 2-3 different recipes using these ingredients. For each recipe, provide:
1. Recipe name
2. Brief description
3. Complete ingredient list (including quantities)
4. Step-by-step instructions
5. Preparation time
6. Cooking time
7. Number of servings
8. Difficulty level (Easy/Medium/Hard)
9. Cuisine type

Format your response as JSON with the following structure:
{
    "recipes": [
        {
            "name": "Recipe Name",
            "description": "Brief description",
            "ingredients": ["ingredient 1", "ingredient 2", ...],
            "instructions": ["step 1", "step 2", ...],
            "prep_time": "X minutes",
            "cook_time": "X minutes",
            "servings": X,
            "difficulty": "Easy/Medium/Hard",
            "cuisine_type": "Cuisine Type"
        }
    ]
}

Make sure the recipes are practical, delicious, and use the available ingredients effectively.
"#;

pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    RECIPE_PROMPT_TEMPLATE.replace("{ingredients}", &ingredients.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_the_joined_ingredient_list() {
        let prompt = build_recipe_prompt(&["Tomato".to_string(), "Basil".to_string()]);

        assert!(prompt.contains("Available ingredients: Tomato, Basil"));
        assert!(!prompt.contains("{ingredients}"));
    }

    #[test]
    fn enumerates_all_recipe_fields() {
        let prompt = build_recipe_prompt(&["Rice".to_string()]);

        assert!(prompt.contains("2-3 different recipes"));
        for field in [
            "\"name\"",
            "\"description\"",
            "\"ingredients\"",
            "\"instructions\"",
            "\"prep_time\"",
            "\"cook_time\"",
            "\"servings\"",
            "\"difficulty\"",
            "\"cuisine_type\"",
        ] {
            assert!(prompt.contains(field), "missing {field} in prompt");
        }
    }
}
