use std::collections::BTreeSet;

use crate::domain::ingredient::{catalog::IngredientCatalog, entities::Detection};

/// Render a term in title case: the first alphabetic character of every word
/// is uppercased, the rest are lowercased.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;

    for character in input.chars() {
        if character.is_alphabetic() {
            if at_word_start {
                output.extend(character.to_uppercase());
            } else {
                output.extend(character.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(character);
            at_word_start = true;
        }
    }

    output
}

/// Catalog keywords appearing in `text` as whole words, title-cased and
/// deduplicated. A keyword inside a longer word ("pepper" in "peppermint")
/// does not match.
pub fn extract_ingredients_from_text(catalog: &IngredientCatalog, text: &str) -> BTreeSet<String> {
    catalog
        .matching_keywords(text)
        .map(title_case)
        .collect()
}

/// Title-cased labels of detections whose text contains a catalog keyword.
/// Detection labels are short pre-tokenized nouns, so substring containment
/// is intentionally looser than the caption extractor's whole-word policy.
/// Container labels indicate food presence but are not ingredients; they are
/// recognized and discarded.
pub fn filter_food_detections(
    catalog: &IngredientCatalog,
    detections: &[Detection],
) -> BTreeSet<String> {
    let mut food_labels = BTreeSet::new();

    for detection in detections {
        let label = detection.label.to_lowercase();

        if catalog.contains_food_term(&label) {
            food_labels.insert(title_case(&detection.label));
        }

        if catalog.is_container(&label) {
            tracing::debug!("Discarding container detection: {}", detection.label);
        }
    }

    food_labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::new().unwrap()
    }

    fn detection(label: &str) -> Detection {
        Detection {
            label: label.to_string(),
            confidence: 0.9,
            bounding_box: [0.0, 0.0, 1.0, 1.0],
        }
    }

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("olive oil"), "Olive Oil");
        assert_eq!(title_case("RED tomato"), "Red Tomato");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn extracts_standalone_keywords_once() {
        let found = extract_ingredients_from_text(
            &catalog(),
            "a tomato next to another tomato and some garlic",
        );

        let expected: Vec<&str> = found.iter().map(String::as_str).collect();
        assert_eq!(expected, vec!["Garlic", "Tomato"]);
    }

    #[test]
    fn ignores_keywords_embedded_in_longer_words() {
        let found = extract_ingredients_from_text(&catalog(), "a peppermint candy on the table");
        assert!(found.is_empty());

        let found = extract_ingredients_from_text(&catalog(), "cracked pepper and peppermint tea");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["Pepper"]);
    }

    #[test]
    fn extracts_multi_word_keywords() {
        let found = extract_ingredients_from_text(&catalog(), "drizzled with olive oil");

        // "oil" also matches as a standalone word inside "olive oil".
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec!["Oil", "Olive Oil"]
        );
    }

    #[test]
    fn empty_caption_yields_no_ingredients() {
        assert!(extract_ingredients_from_text(&catalog(), "").is_empty());
        assert!(extract_ingredients_from_text(&catalog(), "an empty wooden desk").is_empty());
    }

    #[test]
    fn keeps_labels_containing_food_terms_as_substrings() {
        let found = filter_food_detections(
            &catalog(),
            &[detection("red tomato"), detection("dining table")],
        );

        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["Red Tomato"]);
    }

    #[test]
    fn discards_container_labels() {
        let found = filter_food_detections(
            &catalog(),
            &[detection("bowl"), detection("plate"), detection("cup")],
        );

        assert!(found.is_empty());
    }

    #[test]
    fn deduplicates_repeated_labels() {
        let found = filter_food_detections(&catalog(), &[detection("onion"), detection("onion")]);
        assert_eq!(found.len(), 1);
    }
}
