use crate::file_upload::upload_config::UploadConfig;
use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// How long the "no file selected" banner stays up.
    pub alert_duration: Duration,
    /// Repaint interval while work is in flight.
    pub tick_rate: Duration,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
    pub upload: UploadConfig,
    pub model: ModelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alert_duration: Duration::from_millis(3000),
            tick_rate: Duration::from_millis(100),
            logger_timezone: utc(),
            window_size: [520.0, 720.0],
            upload: UploadConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
