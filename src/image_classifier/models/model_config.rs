use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub top_k: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("./models/mobilenetv2-7.onnx"),
            labels_path: PathBuf::from("./models/imagenet_labels.txt"),
            input_shape: (224, 224),
            top_k: 3,
        }
    }
}
