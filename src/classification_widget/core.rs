use crate::classification_widget::label::identified_message;
use crate::config::Config;
use crate::file_upload::interface::{UploadEvent, UploadedFile};
use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::Classification;
use crate::object_url::interface::ObjectUrl;
use image::DynamicImage;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const FAILURE_MESSAGE: &str =
    "An unknown error occurred while identifying the image. Please try again or with a new image.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// At most one file.
    pub files: Vec<UploadedFile>,
    pub is_loading: bool,
    pub show_alert: bool,
    pub response_message: Option<String>,
    pub feedback_given: bool,
    pub is_identified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    Loading,
    Identified,
    Ready,
}

impl State {
    pub fn is_submit_disabled(&self) -> bool {
        self.is_loading || self.is_identified
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.is_loading {
            SubmitButton::Loading
        } else if self.is_identified {
            SubmitButton::Identified
        } else {
            SubmitButton::Ready
        }
    }

    pub fn shows_feedback_buttons(&self) -> bool {
        self.response_message.is_some() && !self.feedback_given
    }
}

/// A decoded image shared between effects without copying pixels.
#[derive(Clone)]
pub struct DecodedImage(pub Arc<DynamicImage>);

impl DecodedImage {
    pub fn new(image: DynamicImage) -> Self {
        Self(Arc::new(image))
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecodedImage({}x{})", self.0.width(), self.0.height())
    }
}

impl PartialEq for DecodedImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug)]
pub enum Event {
    FilesChanged(Vec<UploadedFile>),
    FileRemoved,
    Submit,
    AlertDismissTimerFired,
    ImageDecodeDone {
        object_url: ObjectUrl,
        result: Result<DecodedImage, ClassifierError>,
    },
    ClassifyDone {
        object_url: ObjectUrl,
        result: Result<Vec<Classification>, ClassifierError>,
    },
    /// Sent by both the approve and the reject button.
    FeedbackGiven,
}

impl From<UploadEvent> for Event {
    fn from(event: UploadEvent) -> Self {
        match event {
            UploadEvent::FilesChanged(files) => Event::FilesChanged(files),
            UploadEvent::FileRemoved => Event::FileRemoved,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScheduleAlertDismiss {
        after: Duration,
    },
    DecodeImage {
        file: UploadedFile,
    },
    ClassifyImage {
        object_url: ObjectUrl,
        image: DecodedImage,
    },
    RevokeObjectUrl {
        object_url: ObjectUrl,
    },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::FilesChanged(files) => (State { files, ..state }, vec![]),

        // an in-flight classification keeps running
        Event::FileRemoved => (
            State {
                response_message: None,
                feedback_given: false,
                is_identified: false,
                ..state
            },
            vec![],
        ),

        Event::Submit if state.is_submit_disabled() => (state, vec![]),

        Event::Submit => {
            let state = State {
                is_loading: true,
                response_message: None,
                feedback_given: false,
                ..state
            };

            match state.files.first().cloned() {
                None => (
                    State {
                        show_alert: true,
                        is_loading: false,
                        ..state
                    },
                    vec![Effect::ScheduleAlertDismiss {
                        after: config.alert_duration,
                    }],
                ),
                Some(file) => (state, vec![Effect::DecodeImage { file }]),
            }
        }

        Event::AlertDismissTimerFired => (
            State {
                show_alert: false,
                ..state
            },
            vec![],
        ),

        Event::ImageDecodeDone {
            object_url,
            result: Ok(image),
        } => (state, vec![Effect::ClassifyImage { object_url, image }]),

        Event::ImageDecodeDone {
            object_url,
            result: Err(_),
        } => (
            State {
                response_message: Some(FAILURE_MESSAGE.to_string()),
                is_loading: false,
                ..state
            },
            vec![Effect::RevokeObjectUrl { object_url }],
        ),

        Event::ClassifyDone { object_url, result } => {
            let message = result.ok().and_then(|c| identified_message(&c));

            let state = match message {
                Some(message) => State {
                    response_message: Some(message),
                    is_identified: true,
                    is_loading: false,
                    ..state
                },
                None => State {
                    response_message: Some(FAILURE_MESSAGE.to_string()),
                    is_loading: false,
                    ..state
                },
            };

            (state, vec![Effect::RevokeObjectUrl { object_url }])
        }

        Event::FeedbackGiven => (
            State {
                feedback_given: true,
                ..state
            },
            vec![],
        ),
    }
}
