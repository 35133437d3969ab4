use crate::classification_widget::core::{DecodedImage, Effect, Event};
use crate::image_classifier::decode::decode_image;
use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::ModelLoader;
use crate::library::logger::interface::Logger;
use crate::object_url::interface::{Blob, ObjectUrl, ObjectUrlStore};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    model_loader: Arc<dyn ModelLoader + Send + Sync>,
    object_urls: Arc<dyn ObjectUrlStore + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        model_loader: Arc<dyn ModelLoader + Send + Sync>,
        object_urls: Arc<dyn ObjectUrlStore + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger,
            model_loader,
            object_urls,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::ScheduleAlertDismiss { after } => {
                std::thread::sleep(after);
                let _ = self.event_sender.send(Event::AlertDismissTimerFired);
            }
            Effect::DecodeImage { file } => {
                let object_url = self.object_urls.create(Blob {
                    bytes: file.bytes.clone(),
                    mime: file.mime.clone(),
                });

                let result = self.decode(&object_url);
                if let Err(e) = &result {
                    self.logger
                        .warn(&format!("Decoding {} failed: {}", file.name, e));
                }

                let _ = self
                    .event_sender
                    .send(Event::ImageDecodeDone { object_url, result });
            }
            Effect::ClassifyImage { object_url, image } => {
                // the model is loaded afresh for every submission
                let result = self
                    .model_loader
                    .load()
                    .and_then(|model| model.classify(&image.0));

                match &result {
                    Ok(classifications) => self
                        .logger
                        .info(&format!("Classifications: {:?}", classifications)),
                    Err(e) => self.logger.warn(&format!("Classification failed: {}", e)),
                }

                let _ = self
                    .event_sender
                    .send(Event::ClassifyDone { object_url, result });
            }
            Effect::RevokeObjectUrl { object_url } => {
                self.object_urls.revoke(&object_url);
            }
        }
    }

    fn decode(&self, object_url: &ObjectUrl) -> Result<DecodedImage, ClassifierError> {
        let blob = self
            .object_urls
            .resolve(object_url)
            .ok_or_else(|| ClassifierError::UnknownObjectUrl(object_url.to_string()))?;

        Ok(DecodedImage::new(decode_image(&blob.bytes)?))
    }
}
