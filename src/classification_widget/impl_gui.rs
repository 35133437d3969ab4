use crate::classification_widget::main::ClassificationWidget;
use crate::classification_widget::render::render;
use crate::file_upload::widget::FileUploadWidget;
use std::error::Error;

pub struct ClassificationWidgetGui {
    widget: ClassificationWidget,
    upload: FileUploadWidget,
}

impl ClassificationWidgetGui {
    pub fn new(widget: ClassificationWidget, upload: FileUploadWidget) -> Self {
        Self { widget, upload }
    }

    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let config = self.widget.config();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(config.window_size)
                .with_min_inner_size([400.0, 520.0])
                .with_drag_and_drop(true),
            ..Default::default()
        };

        eframe::run_native("Image Identifier", options, Box::new(|_cc| Box::new(self)))
            .map_err(|e| e.to_string().into())
    }
}

impl eframe::App for ClassificationWidgetGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.widget.process_pending();

        let events = render(ctx, self.widget.state(), &mut self.upload);
        if !events.is_empty() {
            for event in events {
                self.widget.dispatch(event);
            }
            ctx.request_repaint();
        }

        // effects report back on other threads, so keep polling while any are pending
        let state = self.widget.state();
        if state.is_loading || state.show_alert {
            ctx.request_repaint_after(self.widget.config().tick_rate);
        }
    }
}
