use classification_widget::impl_gui::ClassificationWidgetGui;
use classification_widget::main::ClassificationWidget;
use clap::Parser;
use config::Config;
use file_upload::widget::FileUploadWidget;
use image_classifier::impl_fake::{FakeOutcome, ModelLoaderFake};
use image_classifier::impl_tract_onnx::ModelLoaderTractOnnx;
use image_classifier::interface::ModelLoader;
use library::logger::impl_tracing::{init_subscriber, LoggerTracing};
use library::logger::interface::Logger;
use object_url::impl_memory::ObjectUrlStoreMemory;
use std::path::PathBuf;
use std::sync::Arc;

mod classification_widget;
mod config;
mod file_upload;
mod image_classifier;
mod library;
mod object_url;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Identify what is in an image")]
struct Cli {
    /// ONNX image-classification model (MobileNetV2, NCHW float input).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Class labels, one per line, in model output order.
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Number of predictions kept per image.
    #[arg(long)]
    top_k: Option<usize>,

    /// Use a built-in fake classifier instead of loading a model.
    #[arg(long)]
    fake_classifier: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(model) = cli.model {
        config.model.onnx_model_path = model;
    }
    if let Some(labels) = cli.labels {
        config.model.labels_path = labels;
    }
    if let Some(top_k) = cli.top_k {
        config.model.top_k = top_k.max(1);
    }

    init_subscriber(config.logger_timezone);

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerTracing::new());

    let model_loader: Arc<dyn ModelLoader + Send + Sync> = if cli.fake_classifier {
        Arc::new(ModelLoaderFake::new(FakeOutcome::Random, logger.clone()))
    } else {
        Arc::new(ModelLoaderTractOnnx::new(
            config.model.clone(),
            logger.clone(),
        ))
    };

    let object_urls = Arc::new(ObjectUrlStoreMemory::new(logger.clone()));

    let upload = FileUploadWidget::new(config.upload.clone(), logger.clone());

    let widget = ClassificationWidget::new(config, logger, model_loader, object_urls);

    ClassificationWidgetGui::new(widget, upload).run()?;

    Ok(())
}
