use futures::try_join;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::IngredientAnalysis,
        helpers::{extract_ingredients_from_text, filter_food_detections},
        ports::{ImageCaptioner, IngredientAnalysisService, ObjectDetector},
        value_objects::AnalyzeImageInput,
    },
    recipe::ports::TextGenerator,
};

impl<C, D, G> IngredientAnalysisService for Service<C, D, G>
where
    C: ImageCaptioner,
    D: ObjectDetector,
    G: TextGenerator,
{
    async fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> Result<IngredientAnalysis, CoreError> {
        // Captioning and detection are independent; run them concurrently and
        // await both before aggregation.
        let (caption, detections) = try_join!(
            self.captioner.caption(input.image_data.clone()),
            self.detector.detect(input.image_data),
        )?;

        tracing::info!("Generated caption: {}", caption);
        tracing::info!("Detected {} objects", detections.len());

        let caption_ingredients = extract_ingredients_from_text(&self.catalog, &caption);
        let object_ingredients = filter_food_detections(&self.catalog, &detections);

        let mut combined = caption_ingredients;
        combined.extend(object_ingredients);
        let ingredients: Vec<String> = combined.into_iter().collect();

        tracing::info!("Identified ingredients: {:?}", ingredients);

        Ok(IngredientAnalysis {
            caption,
            detections,
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ingredient::{
            catalog::IngredientCatalog,
            entities::Detection,
            ports::{MockImageCaptioner, MockObjectDetector},
        },
        recipe::ports::MockTextGenerator,
    };

    fn service(
        captioner: MockImageCaptioner,
        detector: MockObjectDetector,
    ) -> Service<MockImageCaptioner, MockObjectDetector, MockTextGenerator> {
        Service::new(
            captioner,
            detector,
            MockTextGenerator::new(),
            IngredientCatalog::new().unwrap(),
        )
    }

    fn detection(label: &str, confidence: f32) -> Detection {
        Detection {
            label: label.to_string(),
            confidence,
            bounding_box: [0.0, 0.0, 10.0, 10.0],
        }
    }

    #[tokio::test]
    async fn unions_caption_and_detection_ingredients() {
        let mut captioner = MockImageCaptioner::new();
        captioner.expect_caption().returning(|_| {
            Box::pin(async { Ok("a bowl of tomato soup with basil".to_string()) })
        });

        let mut detector = MockObjectDetector::new();
        detector.expect_detect().returning(|_| {
            Box::pin(async {
                Ok(vec![
                    detection("red tomato", 0.91),
                    detection("onion", 0.88),
                ])
            })
        });

        let analysis = service(captioner, detector)
            .analyze_image(AnalyzeImageInput {
                image_data: vec![1, 2, 3],
            })
            .await
            .unwrap();

        assert_eq!(
            analysis.ingredients,
            vec!["Basil", "Onion", "Red Tomato", "Tomato"]
        );
        assert_eq!(analysis.caption, "a bowl of tomato soup with basil");
        assert_eq!(analysis.detections.len(), 2);
    }

    #[tokio::test]
    async fn overlapping_ingredients_are_deduplicated() {
        let mut captioner = MockImageCaptioner::new();
        captioner
            .expect_caption()
            .returning(|_| Box::pin(async { Ok("a ripe tomato".to_string()) }));

        let mut detector = MockObjectDetector::new();
        detector.expect_detect().returning(|_| {
            Box::pin(async { Ok(vec![detection("tomato", 0.95), detection("onion", 0.9)]) })
        });

        let analysis = service(captioner, detector)
            .analyze_image(AnalyzeImageInput { image_data: vec![0] })
            .await
            .unwrap();

        assert_eq!(analysis.ingredients, vec!["Onion", "Tomato"]);
    }

    #[tokio::test]
    async fn propagates_captioner_failure() {
        let mut captioner = MockImageCaptioner::new();
        captioner.expect_caption().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("model offline".to_string())) })
        });

        let mut detector = MockObjectDetector::new();
        detector
            .expect_detect()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let result = service(captioner, detector)
            .analyze_image(AnalyzeImageInput { image_data: vec![0] })
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn empty_caption_and_detections_yield_no_ingredients() {
        let mut captioner = MockImageCaptioner::new();
        captioner
            .expect_caption()
            .returning(|_| Box::pin(async { Ok(String::new()) }));

        let mut detector = MockObjectDetector::new();
        detector
            .expect_detect()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let analysis = service(captioner, detector)
            .analyze_image(AnalyzeImageInput { image_data: vec![0] })
            .await
            .unwrap();

        assert!(analysis.ingredients.is_empty());
    }
}
