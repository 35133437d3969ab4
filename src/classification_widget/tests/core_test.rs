use crate::classification_widget::core::{
    init, transition, DecodedImage, Effect, Event, State, SubmitButton, FAILURE_MESSAGE,
};
use crate::classification_widget::tests::fixture::{png_file, tabby};
use crate::config::Config;
use crate::image_classifier::error::ClassifierError;
use crate::object_url::interface::ObjectUrl;
use image::DynamicImage;
use std::time::Duration;

fn url() -> ObjectUrl {
    ObjectUrl("blob:image-identifier/1".to_string())
}

fn with_file() -> State {
    State {
        files: vec![png_file()],
        ..State::default()
    }
}

fn identified() -> State {
    State {
        files: vec![png_file()],
        response_message: Some("The image has been identified as: Tabby!".to_string()),
        is_identified: true,
        ..State::default()
    }
}

#[test]
fn test_init() {
    let (state, effects) = init();

    assert_eq!(state, State::default());
    assert!(state.files.is_empty());
    assert!(!state.is_loading && !state.show_alert && !state.is_identified);
    assert!(effects.is_empty());
    assert_eq!(state.submit_button(), SubmitButton::Ready);
}

#[test]
fn test_files_changed_stores_file_verbatim() {
    let config = Config::default();
    let file = png_file();

    let (state, effects) = transition(
        &config,
        State::default(),
        Event::FilesChanged(vec![file.clone()]),
    );

    assert_eq!(state.files, vec![file]);
    assert!(effects.is_empty());
}

#[test]
fn test_submit_without_file_shows_alert() {
    let config = Config::default();

    let (state, effects) = transition(&config, State::default(), Event::Submit);

    assert!(state.show_alert);
    assert!(!state.is_loading);
    assert_eq!(state.response_message, None);
    assert_eq!(
        effects,
        vec![Effect::ScheduleAlertDismiss {
            after: Duration::from_millis(3000)
        }]
    );

    let (state, effects) = transition(&config, state, Event::AlertDismissTimerFired);
    assert!(!state.show_alert);
    assert!(effects.is_empty());
}

#[test]
fn test_repeated_alerts_each_schedule_a_timer() {
    let config = Config::default();

    let (state, first) = transition(&config, State::default(), Event::Submit);
    let (state, second) = transition(&config, state, Event::Submit);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert!(state.show_alert);

    // the first timer to fire hides the banner
    let (state, _) = transition(&config, state, Event::AlertDismissTimerFired);
    assert!(!state.show_alert);
}

#[test]
fn test_submit_with_file_starts_decoding() {
    let config = Config::default();
    let state = State {
        response_message: Some(FAILURE_MESSAGE.to_string()),
        feedback_given: true,
        ..with_file()
    };

    let (state, effects) = transition(&config, state, Event::Submit);

    assert!(state.is_loading);
    assert!(!state.show_alert);
    assert_eq!(state.response_message, None);
    assert!(!state.feedback_given);
    assert_eq!(effects, vec![Effect::DecodeImage { file: png_file() }]);
    assert_eq!(state.submit_button(), SubmitButton::Loading);
}

#[test]
fn test_submit_is_ignored_while_loading_or_identified() {
    let config = Config::default();

    let loading = State {
        is_loading: true,
        ..with_file()
    };
    let (state, effects) = transition(&config, loading.clone(), Event::Submit);
    assert_eq!(state, loading);
    assert!(effects.is_empty());

    let (state, effects) = transition(&config, identified(), Event::Submit);
    assert_eq!(state, identified());
    assert!(effects.is_empty());
    assert_eq!(state.submit_button(), SubmitButton::Identified);
}

#[test]
fn test_decoded_image_is_classified() {
    let config = Config::default();
    let state = State {
        is_loading: true,
        ..with_file()
    };
    let image = DecodedImage::new(DynamicImage::new_rgb8(2, 2));

    let (state, effects) = transition(
        &config,
        state,
        Event::ImageDecodeDone {
            object_url: url(),
            result: Ok(image.clone()),
        },
    );

    assert!(state.is_loading);
    assert_eq!(
        effects,
        vec![Effect::ClassifyImage {
            object_url: url(),
            image
        }]
    );
}

#[test]
fn test_decode_failure_reports_and_revokes() {
    let config = Config::default();
    let state = State {
        is_loading: true,
        ..with_file()
    };

    let (state, effects) = transition(
        &config,
        state,
        Event::ImageDecodeDone {
            object_url: url(),
            result: Err(ClassifierError::UnknownObjectUrl(url().to_string())),
        },
    );

    assert!(!state.is_loading);
    assert!(!state.is_identified);
    assert_eq!(state.response_message.as_deref(), Some(FAILURE_MESSAGE));
    assert_eq!(effects, vec![Effect::RevokeObjectUrl { object_url: url() }]);
}

#[test]
fn test_classification_success() {
    let config = Config::default();
    let state = State {
        is_loading: true,
        ..with_file()
    };

    let (state, effects) = transition(
        &config,
        state,
        Event::ClassifyDone {
            object_url: url(),
            result: Ok(tabby()),
        },
    );

    assert!(!state.is_loading);
    assert!(state.is_identified);
    assert_eq!(
        state.response_message.as_deref(),
        Some("The image has been identified as: Tabby!")
    );
    assert!(state.shows_feedback_buttons());
    assert_eq!(effects, vec![Effect::RevokeObjectUrl { object_url: url() }]);
}

#[test]
fn test_classification_failure() {
    let config = Config::default();
    let state = State {
        is_loading: true,
        ..with_file()
    };

    let (state, effects) = transition(
        &config,
        state,
        Event::ClassifyDone {
            object_url: url(),
            result: Err(ClassifierError::Inference("boom".to_string())),
        },
    );

    assert!(!state.is_loading);
    assert!(!state.is_identified);
    assert_eq!(state.response_message.as_deref(), Some(FAILURE_MESSAGE));
    assert_eq!(state.submit_button(), SubmitButton::Ready);
    assert_eq!(effects, vec![Effect::RevokeObjectUrl { object_url: url() }]);
}

#[test]
fn test_empty_predictions_count_as_failure() {
    let config = Config::default();
    let state = State {
        is_loading: true,
        ..with_file()
    };

    let (state, _) = transition(
        &config,
        state,
        Event::ClassifyDone {
            object_url: url(),
            result: Ok(vec![]),
        },
    );

    assert!(!state.is_identified);
    assert_eq!(state.response_message.as_deref(), Some(FAILURE_MESSAGE));
}

#[test]
fn test_either_feedback_button_hides_both() {
    let config = Config::default();

    let (state, effects) = transition(&config, identified(), Event::FeedbackGiven);

    assert!(state.feedback_given);
    assert!(!state.shows_feedback_buttons());
    assert!(state.response_message.is_some());
    assert!(effects.is_empty());
}

#[test]
fn test_file_removal_resets_result() {
    let config = Config::default();

    for feedback_given in [false, true] {
        let state = State {
            feedback_given,
            ..identified()
        };
        let (state, _) = transition(&config, state, Event::FilesChanged(vec![]));
        let (state, effects) = transition(&config, state, Event::FileRemoved);

        assert_eq!(state, State::default());
        assert!(effects.is_empty());
    }
}

#[test]
fn test_file_removal_does_not_touch_loading() {
    let config = Config::default();
    let state = State {
        is_loading: true,
        ..with_file()
    };

    let (state, effects) = transition(&config, state, Event::FileRemoved);

    assert!(state.is_loading);
    assert!(effects.is_empty());
}
