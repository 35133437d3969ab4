use crate::image_classifier::error::ClassifierError;
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// A loaded model. Predictions come back ordered from most to least confident.
pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError>;
}

/// Produces a fresh model handle on every call.
pub trait ModelLoader: Send + Sync {
    fn load(&self) -> Result<Box<dyn ImageClassifier>, ClassifierError>;
}
