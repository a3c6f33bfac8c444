use crate::domain::{
    ingredient::{
        catalog::IngredientCatalog,
        ports::{ImageCaptioner, ObjectDetector},
    },
    recipe::ports::TextGenerator,
};

/// Shared service backing every domain service trait. Holds the three model
/// collaborators and the ingredient catalog; collaborators are injected once
/// at construction and never swapped afterwards.
#[derive(Debug, Clone)]
pub struct Service<C, D, G>
where
    C: ImageCaptioner,
    D: ObjectDetector,
    G: TextGenerator,
{
    pub(crate) captioner: C,
    pub(crate) detector: D,
    pub(crate) generator: G,
    pub(crate) catalog: IngredientCatalog,
}

impl<C, D, G> Service<C, D, G>
where
    C: ImageCaptioner,
    D: ObjectDetector,
    G: TextGenerator,
{
    pub fn new(captioner: C, detector: D, generator: G, catalog: IngredientCatalog) -> Self {
        Self {
            captioner,
            detector,
            generator,
            catalog,
        }
    }
}
