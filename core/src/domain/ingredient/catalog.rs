use regex::RegexSet;

const VEGETABLES: &[&str] = &[
    "tomato",
    "onion",
    "carrot",
    "potato",
    "pepper",
    "lettuce",
    "spinach",
    "broccoli",
    "cauliflower",
    "cucumber",
    "celery",
    "garlic",
    "ginger",
    "mushroom",
    "corn",
    "peas",
    "beans",
    "cabbage",
    "zucchini",
    "eggplant",
];

const FRUITS: &[&str] = &[
    "apple",
    "banana",
    "orange",
    "lemon",
    "lime",
    "strawberry",
    "blueberry",
    "grape",
    "pineapple",
    "mango",
    "avocado",
    "peach",
    "pear",
    "cherry",
];

const PROTEINS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "fish",
    "salmon",
    "tuna",
    "shrimp",
    "egg",
    "tofu",
    "cheese",
    "milk",
    "yogurt",
    "turkey",
    "ham",
    "bacon",
];

const GRAINS: &[&str] = &[
    "rice", "pasta", "bread", "flour", "oats", "quinoa", "barley", "wheat",
];

const HERBS_SPICES: &[&str] = &[
    "basil",
    "oregano",
    "thyme",
    "rosemary",
    "parsley",
    "cilantro",
    "mint",
    "sage",
    "salt",
    "pepper",
    "paprika",
    "cumin",
    "turmeric",
];

const PANTRY: &[&str] = &[
    "oil",
    "butter",
    "sugar",
    "honey",
    "vinegar",
    "soy sauce",
    "olive oil",
];

/// Known food terms grouped by category, in catalog order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("vegetables", VEGETABLES),
    ("fruits", FRUITS),
    ("proteins", PROTEINS),
    ("grains", GRAINS),
    ("herbs_spices", HERBS_SPICES),
    ("pantry", PANTRY),
];

/// Labels that name food containers rather than food. Matching detections
/// are recognized and discarded without producing an ingredient.
const FOOD_CONTAINERS: &[&str] = &["bowl", "plate", "cup", "bottle", "jar", "can"];

/// Static vocabulary of known food terms, with one precompiled whole-word
/// pattern per keyword. Built once at service construction, never mutated.
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    keywords: Vec<&'static str>,
    word_patterns: RegexSet,
}

impl IngredientCatalog {
    pub fn new() -> Result<Self, regex::Error> {
        let keywords: Vec<&'static str> = CATEGORIES
            .iter()
            .flat_map(|(_, terms)| terms.iter().copied())
            .collect();

        let patterns = keywords
            .iter()
            .map(|keyword| format!(r"(?i)\b{}\b", regex::escape(keyword)));
        let word_patterns = RegexSet::new(patterns)?;

        Ok(Self {
            keywords,
            word_patterns,
        })
    }

    /// All known food terms, flattened in category order. Terms appearing in
    /// more than one category ("pepper") are kept as-is; consumers
    /// deduplicate their output.
    pub fn keywords(&self) -> &[&'static str] {
        &self.keywords
    }

    /// Keywords that appear in `text` as whole words, case-insensitively.
    pub fn matching_keywords(&self, text: &str) -> impl Iterator<Item = &'static str> + '_ {
        self.word_patterns
            .matches(text)
            .into_iter()
            .map(|index| self.keywords[index])
    }

    /// Whether the lower-cased label text contains any catalog keyword as a
    /// substring.
    pub fn contains_food_term(&self, label: &str) -> bool {
        self.keywords.iter().any(|keyword| label.contains(keyword))
    }

    /// Whether the lower-cased label text names a food container.
    pub fn is_container(&self, label: &str) -> bool {
        FOOD_CONTAINERS
            .iter()
            .any(|container| label.contains(container))
    }
}
