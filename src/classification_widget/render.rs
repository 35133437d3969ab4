use crate::classification_widget::core::{Event, State, SubmitButton};
use crate::file_upload::widget::FileUploadWidget;

pub const ALERT_MESSAGE: &str = "Error! You can't identify an image without inputting one first!";
pub const FEEDBACK_PROMPT: &str = "Are we right?";
pub const FEEDBACK_THANKS: &str =
    "Thanks for your feedback, we'll use this to help train our model and make it better!";

const CARD_WIDTH: f32 = 420.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(224, 231, 255);
const ERROR: egui::Color32 = egui::Color32::from_rgb(248, 114, 114);

/// Draws the whole window and returns the interactions that happened this frame.
pub fn render(ctx: &egui::Context, state: &State, upload: &mut FileUploadWidget) -> Vec<Event> {
    let mut events = Vec::new();

    if state.show_alert {
        egui::TopBottomPanel::top("alert").show(ctx, |ui| render_alert(ui));
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(CARD_WIDTH);
            ui.add_space(24.0);
            render_card(ui, state, upload, &mut events);
        });
    });

    events
}

fn render_alert(ui: &mut egui::Ui) {
    egui::Frame::none()
        .fill(ERROR)
        .inner_margin(egui::Margin::same(12.0))
        .rounding(egui::Rounding::same(8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⊗").color(egui::Color32::BLACK).size(20.0));
                ui.label(egui::RichText::new(ALERT_MESSAGE).color(egui::Color32::BLACK));
            });
        });
}

fn render_card(
    ui: &mut egui::Ui,
    state: &State,
    upload: &mut FileUploadWidget,
    events: &mut Vec<Event>,
) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(24.0))
        .rounding(egui::Rounding::same(12.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("🔍").size(48.0));
                ui.heading(egui::RichText::new("Image Identifier").size(28.0).color(ACCENT));
                ui.add_space(16.0);

                events.extend(upload.show(ui, &state.files).into_iter().map(Event::from));
                ui.add_space(8.0);

                if render_submit(ui, state) {
                    events.push(Event::Submit);
                }

                if let Some(message) = &state.response_message {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.label(egui::RichText::new(message.as_str()).strong().color(ACCENT));

                    if state.shows_feedback_buttons() {
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new(FEEDBACK_PROMPT).color(ACCENT));
                        ui.horizontal(|ui| {
                            let correct = ui
                                .add(egui::Button::new("👍").min_size(egui::vec2(40.0, 40.0)))
                                .on_hover_text("Correct");
                            let incorrect = ui
                                .add(egui::Button::new("👎").min_size(egui::vec2(40.0, 40.0)))
                                .on_hover_text("Incorrect");
                            if correct.clicked() || incorrect.clicked() {
                                events.push(Event::FeedbackGiven);
                            }
                        });
                    } else {
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new(FEEDBACK_THANKS).color(ACCENT));
                    }
                }
            });
        });
}

/// Returns true when the submit button was clicked.
fn render_submit(ui: &mut egui::Ui, state: &State) -> bool {
    let size = egui::vec2(ui.available_width(), 36.0);

    match state.submit_button() {
        SubmitButton::Loading => {
            ui.add_enabled_ui(false, |ui| {
                ui.add_sized(size, egui::Spinner::new());
            });
            false
        }
        SubmitButton::Identified => {
            ui.add_enabled(false, egui::Button::new("✔").min_size(size));
            false
        }
        SubmitButton::Ready => ui
            .add_enabled(
                !state.is_submit_disabled(),
                egui::Button::new("Identify").min_size(size),
            )
            .clicked(),
    }
}
