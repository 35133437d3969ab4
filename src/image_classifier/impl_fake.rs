use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier, ModelLoader};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const OBJECTS: [&str; 12] = [
    "tabby, tabby cat",
    "golden retriever",
    "three-toed sloth, ai, Bradypus tridactylus",
    "hard disc, hard disk, fixed disk",
    "espresso",
    "mountain bike, all-terrain bike, off-roader",
    "laptop, laptop computer",
    "coffee mug",
    "daisy",
    "pizza, pizza pie",
    "wall clock",
    "computer keyboard, keypad",
];

#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Random,
    Predict(Vec<Classification>),
    FailLoad,
    FailClassify,
}

pub struct ModelLoaderFake {
    outcome: FakeOutcome,
    load_count: Arc<AtomicUsize>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelLoaderFake {
    pub fn new(outcome: FakeOutcome, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            outcome,
            load_count: Arc::new(AtomicUsize::new(0)),
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }

    #[cfg(test)]
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

impl ModelLoader for ModelLoaderFake {
    fn load(&self) -> Result<Box<dyn ImageClassifier>, ClassifierError> {
        let count = self.load_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.logger.info(&format!("Loading fake model (load #{})", count));

        if let FakeOutcome::FailLoad = self.outcome {
            return Err(ClassifierError::ModelLoad {
                path: PathBuf::from("fake"),
                message: "fake model refused to load".to_string(),
            });
        }

        Ok(Box::new(ImageClassifierFake {
            outcome: self.outcome.clone(),
            logger: self.logger.clone(),
        }))
    }
}

pub struct ImageClassifierFake {
    outcome: FakeOutcome,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ));

        match &self.outcome {
            FakeOutcome::Predict(classifications) => Ok(classifications.clone()),
            FakeOutcome::FailClassify | FakeOutcome::FailLoad => {
                Err(ClassifierError::Inference("fake classifier failed".to_string()))
            }
            FakeOutcome::Random => random_classifications(),
        }
    }
}

fn random_classifications() -> Result<Vec<Classification>, ClassifierError> {
    let mut rng = rand::rng();

    let index_dist = Uniform::new(0, OBJECTS.len())
        .map_err(|e| ClassifierError::Inference(e.to_string()))?;
    let confidence_dist =
        Uniform::new(0.0f32, 1.0).map_err(|e| ClassifierError::Inference(e.to_string()))?;

    let mut classifications: Vec<Classification> = (0..3)
        .map(|_| Classification {
            label: OBJECTS[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        })
        .collect();
    classifications.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(classifications)
}
