use crate::file_upload::interface::{UploadError, UploadEvent, UploadedFile};
use crate::file_upload::upload_config::UploadConfig;
use crate::file_upload::validate::{accept_file, read_file};
use crate::image_classifier::decode::decode_image;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

const PREVIEW_SIZE: u32 = 256;

/// Where a picked file comes from.
enum Source {
    Bytes { name: String, bytes: Arc<[u8]> },
    Path(PathBuf),
}

/// Result of reading, validating and thumbnailing one picked file.
struct LoadedFile {
    result: Result<UploadedFile, UploadError>,
    preview: Option<egui::ColorImage>,
}

/// Single-file drop zone with browse dialog, remove control and image preview.
///
/// Reading, type sniffing and preview decoding run on worker threads; results
/// are picked up on the next frame.
pub struct FileUploadWidget {
    config: UploadConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    rejection: Option<String>,
    preview: Option<egui::TextureHandle>,
    pending: usize,
    loaded_sender: Sender<LoadedFile>,
    loaded_receiver: Receiver<LoadedFile>,
}

impl FileUploadWidget {
    pub fn new(config: UploadConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let logger = logger.with_namespace("file_upload");
        logger.info(&format!(
            "Accepting {:?} (server {}, instant upload {}, process {})",
            config.accepted_file_types, config.server, config.instant_upload, config.allow_process
        ));
        let (loaded_sender, loaded_receiver) = channel();

        Self {
            config,
            logger,
            rejection: None,
            preview: None,
            pending: 0,
            loaded_sender,
            loaded_receiver,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, files: &[UploadedFile]) -> Vec<UploadEvent> {
        let mut events = Vec::new();
        let ctx = ui.ctx().clone();

        if files.is_empty() {
            self.preview = None;
        }

        self.receive_loaded(&ctx, !files.is_empty(), &mut events);

        if let Some(dropped) = ctx.input(|i| i.raw.dropped_files.first().cloned()) {
            match source_of_dropped(&dropped) {
                Ok(source) => self.spawn_load(&ctx, source),
                Err(e) => self.reject(e),
            }
        }

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());

            match files.first() {
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(8.0);
                        ui.label(self.config.label_idle.as_str());
                        if ui.button("Browse").clicked() {
                            let extensions = self.config.accepted_extensions();
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Images", extensions.as_slice())
                                .pick_file()
                            {
                                self.spawn_load(&ctx, Source::Path(path));
                            }
                        }
                        ui.add_space(8.0);
                    });
                }
                Some(file) => {
                    if let Some(texture) = &self.preview {
                        let size = texture.size_vec2();
                        let scale = (ui.available_width() / size.x).min(1.0);
                        ui.vertical_centered(|ui| {
                            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                                texture.id(),
                                size * scale,
                            )));
                        });
                    }

                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&file.name).strong());
                        ui.label(format!("{} KB", file.bytes.len() / 1024));
                        if ui.button("✖").on_hover_text("Remove").clicked() {
                            events.extend(self.remove(file));
                        }
                    });
                }
            }

            if self.pending > 0 {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Reading image...");
                });
            }

            if let Some(rejection) = &self.rejection {
                ui.colored_label(egui::Color32::LIGHT_RED, rejection.as_str());
            }
        });

        events
    }

    /// Clears the current file: the list empties first, then the removal is reported.
    fn remove(&mut self, file: &UploadedFile) -> Vec<UploadEvent> {
        self.logger.info(&format!("Removed {}", file.name));
        self.preview = None;
        self.rejection = None;
        vec![UploadEvent::FilesChanged(vec![]), UploadEvent::FileRemoved]
    }

    fn spawn_load(&mut self, ctx: &egui::Context, source: Source) {
        self.pending += 1;

        let accepted = self.config.accepted_file_types.clone();
        let sender = self.loaded_sender.clone();
        let logger = self.logger.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let loaded = load_file(source, &accepted, logger.as_ref());
            let _ = sender.send(loaded);
            ctx.request_repaint();
        });
    }

    fn receive_loaded(
        &mut self,
        ctx: &egui::Context,
        mut has_file: bool,
        events: &mut Vec<UploadEvent>,
    ) {
        while let Ok(loaded) = self.loaded_receiver.try_recv() {
            self.pending = self.pending.saturating_sub(1);

            match loaded.result {
                Ok(file) => {
                    self.logger
                        .info(&format!("Selected {} ({:?})", file.name, file.mime));
                    self.rejection = None;
                    self.preview = loaded.preview.map(|image| {
                        ctx.load_texture(
                            format!("preview:{}", file.name),
                            image,
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    // a new pick replaces the current file
                    if has_file {
                        events.push(UploadEvent::FileRemoved);
                    }
                    events.push(UploadEvent::FilesChanged(vec![file]));
                    has_file = true;
                }
                Err(e) => self.reject(e),
            }
        }
    }

    fn reject(&mut self, error: UploadError) {
        self.logger.warn(&error.to_string());
        self.rejection = Some(error.to_string());
    }
}

fn source_of_dropped(dropped: &egui::DroppedFile) -> Result<Source, UploadError> {
    if let Some(bytes) = &dropped.bytes {
        return Ok(Source::Bytes {
            name: dropped.name.clone(),
            bytes: bytes.clone(),
        });
    }

    match &dropped.path {
        Some(path) => Ok(Source::Path(path.clone())),
        None => Err(UploadError::Unreadable(dropped.name.clone())),
    }
}

fn load_file(source: Source, accepted: &[String], logger: &dyn Logger) -> LoadedFile {
    let result = match source {
        Source::Bytes { name, bytes } => accept_file(&name, bytes, accepted),
        Source::Path(path) => read_file(&path, accepted),
    };

    let preview = match &result {
        Ok(file) => preview_image(file, logger),
        Err(_) => None,
    };

    LoadedFile { result, preview }
}

fn preview_image(file: &UploadedFile, logger: &dyn Logger) -> Option<egui::ColorImage> {
    match decode_image(&file.bytes) {
        Ok(image) => {
            let thumbnail = image.thumbnail(PREVIEW_SIZE, PREVIEW_SIZE).to_rgba8();
            let size = [thumbnail.width() as usize, thumbnail.height() as usize];
            Some(egui::ColorImage::from_rgba_unmultiplied(
                size,
                thumbnail.as_raw(),
            ))
        }
        Err(e) => {
            logger.warn(&format!("No preview for {}: {}", file.name, e));
            None
        }
    }
}
