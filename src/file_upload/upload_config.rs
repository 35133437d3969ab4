#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    pub accepted_file_types: Vec<String>,
    /// Remote endpoint for the widget's own upload behavior. Processing is disabled,
    /// so this is carried as configuration only.
    pub server: String,
    pub instant_upload: bool,
    pub allow_process: bool,
    pub label_idle: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_file_types: vec![
                "image/jpeg".to_string(),
                "image/jpg".to_string(),
                "image/png".to_string(),
            ],
            server: "https://api.dhanwanth.pp.ua/predict".to_string(),
            instant_upload: false,
            allow_process: false,
            label_idle: "Drag & Drop your image or Browse".to_string(),
        }
    }
}

impl UploadConfig {
    /// File extensions offered by the browse dialog.
    pub fn accepted_extensions(&self) -> Vec<&'static str> {
        let mut extensions = Vec::new();
        for mime in &self.accepted_file_types {
            let candidates: &[&'static str] = match mime.as_str() {
                "image/jpeg" | "image/jpg" => &["jpg", "jpeg"],
                "image/png" => &["png"],
                _ => &[],
            };
            for ext in candidates {
                if !extensions.contains(ext) {
                    extensions.push(*ext);
                }
            }
        }
        extensions
    }
}
