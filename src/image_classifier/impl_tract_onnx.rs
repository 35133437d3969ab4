use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier, ModelLoader};
use crate::image_classifier::labels::load_labels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ModelLoaderTractOnnx {
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelLoaderTractOnnx {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("image_classifier").with_namespace("tract_onnx"),
        }
    }

    fn model_load_error(&self, error: impl std::fmt::Display) -> ClassifierError {
        ClassifierError::ModelLoad {
            path: self.config.onnx_model_path.clone(),
            message: error.to_string(),
        }
    }
}

impl ModelLoader for ModelLoaderTractOnnx {
    fn load(&self) -> Result<Box<dyn ImageClassifier>, ClassifierError> {
        self.logger.info(&format!(
            "Loading model from {}",
            self.config.onnx_model_path.display()
        ));

        let (height, width) = self.config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&self.config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| self.model_load_error(e))?;

        let labels = load_labels(&self.config.labels_path)?;

        self.logger
            .info(&format!("Model loaded with {} labels", labels.len()));

        Ok(Box::new(ImageClassifierTractOnnx {
            model,
            labels,
            config: self.config.clone(),
        }))
    }
}

pub struct ImageClassifierTractOnnx {
    model: TypedRunnableModel<TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(image, width, height);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or(ClassifierError::NoPredictions)?
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let logits: Vec<f32> = output.iter().copied().collect();

        Ok(top_predictions(&logits, &self.labels, self.config.top_k))
    }
}

pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max_logit = logits.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max_logit).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|&x| x / sum).collect()
}

/// Highest-probability classes first. Some exports prepend a background class, so an
/// output one longer than the label list is shifted by one.
pub fn top_predictions(logits: &[f32], labels: &[String], top_k: usize) -> Vec<Classification> {
    let offset = if logits.len() == labels.len() + 1 { 1 } else { 0 };
    let probabilities = softmax(logits);

    let mut indexed: Vec<(usize, f32)> = probabilities
        .into_iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, p)| (idx - offset, p))
        .collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed.truncate(top_k);

    indexed
        .into_iter()
        .map(|(idx, confidence)| Classification {
            label: labels
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("class_{}", idx)),
            confidence,
        })
        .collect()
}
