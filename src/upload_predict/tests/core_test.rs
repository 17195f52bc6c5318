use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::file_reader::impl_fake::FileReaderFake;
use crate::file_reader::interface::{FileReadError, SelectedFile};
use crate::predict_client::interface::{PredictError, PredictionResult};
use crate::upload_predict::core::{
    init, transition, ContactField, Effect, Event, PredictControl, Results, State, Timer,
    UploadLabel, UploadState,
};

fn leaf() -> SelectedFile {
    SelectedFile::from_path("/photos/leaf.jpg")
}

fn select_leaf(config: &Config, state: State) -> (State, Vec<Effect>) {
    transition(
        config,
        state,
        Event::FilesSelected(vec![PathBuf::from("/photos/leaf.jpg")]),
    )
}

fn loaded_state(config: &Config) -> State {
    let (state, _) = select_leaf(config, State::new(Instant::now()));
    let (state, _) = transition(
        config,
        state,
        Event::FileRead {
            file: leaf(),
            result: Ok(FileReaderFake::preview()),
        },
    );
    state
}

fn started_timer(effects: &[Effect], wanted: Timer) -> Option<u64> {
    effects.iter().find_map(|effect| match effect {
        Effect::StartTimer {
            timer, generation, ..
        } if *timer == wanted => Some(*generation),
        _ => None,
    })
}

#[test]
fn test_init() {
    let (state, effects) = init();

    assert_eq!(state.upload, UploadState::NoFile);
    assert_eq!(state.upload_label, UploadLabel::ChooseImage);
    assert_eq!(state.predict, PredictControl::Ready);
    assert_eq!(state.results, Results::Hidden);
    assert_eq!(effects, vec![Effect::SubscribeTick]);
}

#[test]
fn test_selecting_no_files_is_a_noop() {
    let config = Config::default();
    let before = State::new(Instant::now());

    let (state, effects) = transition(&config, before.clone(), Event::FilesSelected(vec![]));

    assert!(effects.is_empty());
    assert_eq!(state.upload, before.upload);
    assert_eq!(state.upload_label, before.upload_label);
    assert!(state.upload_enabled);
}

#[test]
fn test_selecting_a_file_starts_reading_it() {
    let config = Config::default();

    let (state, effects) = select_leaf(&config, State::new(Instant::now()));

    assert_eq!(state.upload, UploadState::Uploading { file: leaf() });
    assert!(state.upload.has_file());
    assert_eq!(state.upload_label, UploadLabel::Uploading);
    assert!(!state.upload_enabled);
    assert!(effects.contains(&Effect::ReadFile { file: leaf() }));
}

#[test]
fn test_only_the_first_selected_file_is_used() {
    let config = Config::default();

    let (state, _) = transition(
        &config,
        State::new(Instant::now()),
        Event::FilesSelected(vec![
            PathBuf::from("/photos/leaf.jpg"),
            PathBuf::from("/photos/other.jpg"),
        ]),
    );

    assert_eq!(state.upload.file(), Some(&leaf()));
}

#[test]
fn test_successful_read_shows_preview_and_hides_results() {
    let config = Config::default();
    let (mut state, _) = select_leaf(&config, State::new(Instant::now()));
    state.results = Results::Error {
        message: "old".to_string(),
        shown_at: Instant::now(),
    };

    let (state, effects) = transition(
        &config,
        state,
        Event::FileRead {
            file: leaf(),
            result: Ok(FileReaderFake::preview()),
        },
    );

    assert!(matches!(state.upload, UploadState::Loaded { .. }));
    assert_eq!(state.upload_label, UploadLabel::ChangeImage);
    assert_eq!(state.upload_label.text(), "Change Image");
    assert!(state.upload_enabled);
    assert_eq!(state.results, Results::Hidden);
    assert!(effects.is_empty());
}

#[test]
fn test_failed_read_shows_upload_failed_then_reverts() {
    let config = Config::default();
    let (state, _) = select_leaf(&config, State::new(Instant::now()));

    let (state, effects) = transition(
        &config,
        state,
        Event::FileRead {
            file: leaf(),
            result: Err(FileReadError::Decode("bad bytes".to_string())),
        },
    );

    assert_eq!(state.upload, UploadState::FileSelected { file: leaf() });
    assert_eq!(state.upload_label.text(), "Upload Failed");
    assert!(state.upload_enabled);
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::LogError { .. })));
    assert!(effects.contains(&Effect::StartTimer {
        timer: Timer::UploadLabelRevert,
        generation: state.timers.current(Timer::UploadLabelRevert),
        delay: Duration::from_millis(2000),
    }));

    let generation = started_timer(&effects, Timer::UploadLabelRevert).unwrap();
    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::UploadLabelRevert,
            generation,
        },
    );

    assert_eq!(state.upload_label.text(), "Choose Image");
}

#[test]
fn test_new_selection_supersedes_pending_label_revert() {
    let config = Config::default();
    let (state, _) = select_leaf(&config, State::new(Instant::now()));
    let (state, effects) = transition(
        &config,
        state,
        Event::FileRead {
            file: leaf(),
            result: Err(FileReadError::Io("gone".to_string())),
        },
    );
    let stale = started_timer(&effects, Timer::UploadLabelRevert).unwrap();

    let (state, effects) = select_leaf(&config, state);
    assert!(effects.contains(&Effect::CancelTimer {
        timer: Timer::UploadLabelRevert
    }));

    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::UploadLabelRevert,
            generation: stale,
        },
    );

    assert_eq!(state.upload_label, UploadLabel::Uploading);
}

#[test]
fn test_read_result_for_a_replaced_file_is_ignored() {
    let config = Config::default();
    let (state, _) = select_leaf(&config, State::new(Instant::now()));
    let (state, _) = transition(
        &config,
        state,
        Event::FilesSelected(vec![PathBuf::from("/photos/newer.jpg")]),
    );

    let (state, _) = transition(
        &config,
        state,
        Event::FileRead {
            file: leaf(),
            result: Ok(FileReaderFake::preview()),
        },
    );

    assert_eq!(
        state.upload,
        UploadState::Uploading {
            file: SelectedFile::from_path("/photos/newer.jpg")
        }
    );
    assert_eq!(state.upload_label, UploadLabel::Uploading);
}

#[test]
fn test_predict_without_file_only_plays_error_cue() {
    let config = Config::default();
    let mut before = State::new(Instant::now());
    before.results = Results::Error {
        message: "previous".to_string(),
        shown_at: Instant::now(),
    };

    let (state, effects) = transition(&config, before.clone(), Event::PredictClicked);

    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::RequestPrediction { .. })));
    assert_eq!(state.results, before.results);
    assert_eq!(state.predict, PredictControl::Ready);
    assert!(state.error_cue.is_some());

    let generation = started_timer(&effects, Timer::ErrorCueClear).unwrap();
    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::ErrorCueClear,
            generation,
        },
    );
    assert!(state.error_cue.is_none());
}

#[test]
fn test_predict_requests_prediction_and_disables_control() {
    let config = Config::default();
    let state = loaded_state(&config);

    let (state, effects) = transition(&config, state, Event::PredictClicked);

    assert!(state.predict.is_busy());
    assert_eq!(state.predict.text(), "Analyzing...");
    assert_eq!(effects, vec![Effect::RequestPrediction { file: leaf() }]);
}

#[test]
fn test_predict_after_failed_read_still_sends_the_file() {
    let config = Config::default();
    let (state, _) = select_leaf(&config, State::new(Instant::now()));
    let (state, _) = transition(
        &config,
        state,
        Event::FileRead {
            file: leaf(),
            result: Err(FileReadError::Decode("bad".to_string())),
        },
    );

    let (_, effects) = transition(&config, state, Event::PredictClicked);

    assert_eq!(effects, vec![Effect::RequestPrediction { file: leaf() }]);
}

#[test]
fn test_predict_while_busy_is_ignored() {
    let config = Config::default();
    let (state, _) = transition(&config, loaded_state(&config), Event::PredictClicked);

    let (state, effects) = transition(&config, state, Event::PredictClicked);

    assert!(effects.is_empty());
    assert!(state.predict.is_busy());
}

#[test]
fn test_successful_prediction_renders_sorted_cards() {
    let config = Config::default();
    let (state, _) = transition(&config, loaded_state(&config), Event::PredictClicked);

    let (state, effects) = transition(
        &config,
        state,
        Event::PredictionDone(Ok(PredictionResult::from_pairs([
            ("Healthy", 12.5),
            ("Blight", 87.5),
        ]))),
    );

    assert_eq!(state.predict, PredictControl::Ready);
    assert_eq!(state.predict.text(), "Predict");

    let Results::Predictions { cards, .. } = &state.results else {
        panic!("expected predictions");
    };
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].label, "Blight");
    assert_eq!(cards[0].rank, 0);
    assert!(cards[0].top);
    assert_eq!(cards[0].percent, "87.50%");
    assert_eq!(cards[1].label, "Healthy");
    assert!(!cards[1].top);

    let generation = started_timer(&effects, Timer::ScrollToResults).unwrap();
    assert!(effects.contains(&Effect::StartTimer {
        timer: Timer::ScrollToResults,
        generation,
        delay: Duration::from_millis(300),
    }));

    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::ScrollToResults,
            generation,
        },
    );
    assert_eq!(state.scroll_requests, 1);
}

#[test]
fn test_failed_prediction_shows_generic_error_and_logs_cause() {
    let config = Config::default();
    let (state, _) = transition(&config, loaded_state(&config), Event::PredictClicked);

    let (state, effects) = transition(
        &config,
        state,
        Event::PredictionDone(Err(PredictError::Status(503))),
    );

    assert_eq!(state.predict, PredictControl::Ready);
    assert_eq!(state.predict.text(), "Predict");
    match &state.results {
        Results::Error { message, .. } => {
            assert_eq!(message, "Prediction failed. Please try again.")
        }
        _ => panic!("Unexpected results"),
    }
    assert_eq!(
        effects,
        vec![Effect::LogError {
            message: "Prediction error: HTTP error! status: 503".to_string()
        }]
    );
}

#[test]
fn test_transport_failure_is_reported_like_any_other() {
    let config = Config::default();
    let (state, _) = transition(&config, loaded_state(&config), Event::PredictClicked);

    let (state, _) = transition(
        &config,
        state,
        Event::PredictionDone(Err(PredictError::Transport("connection refused".to_string()))),
    );

    assert!(matches!(state.results, Results::Error { .. }));
    assert!(!state.predict.is_busy());
}

#[test]
fn test_stale_timer_generation_is_ignored() {
    let config = Config::default();
    let (state, first) = transition(&config, State::new(Instant::now()), Event::PredictClicked);
    let (state, second) = transition(&config, state, Event::PredictClicked);

    let stale = started_timer(&first, Timer::ErrorCueClear).unwrap();
    let latest = started_timer(&second, Timer::ErrorCueClear).unwrap();
    assert!(latest > stale);

    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::ErrorCueClear,
            generation: stale,
        },
    );
    assert!(state.error_cue.is_some());

    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::ErrorCueClear,
            generation: latest,
        },
    );
    assert!(state.error_cue.is_none());
}

#[test]
fn test_contact_form_submission() {
    let config = Config::default();
    let state = State::new(Instant::now());

    let (state, _) = transition(
        &config,
        state,
        Event::ContactEdited {
            field: ContactField::Name,
            value: "Ada".to_string(),
        },
    );
    let (state, _) = transition(
        &config,
        state,
        Event::ContactEdited {
            field: ContactField::Message,
            value: "Lovely leaves".to_string(),
        },
    );
    assert_eq!(state.contact.name, "Ada");
    assert_eq!(state.contact.message, "Lovely leaves");

    let (state, effects) = transition(&config, state, Event::ContactSubmitted);

    assert!(state.contact.name.is_empty());
    assert!(state.contact.email.is_empty());
    assert!(state.contact.message.is_empty());
    assert!(state.contact.notice_shown_at.is_some());
    assert!(state.contact.confirmed_at.is_some());
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::RequestPrediction { .. })));

    let generation = started_timer(&effects, Timer::ContactNoticeClear).unwrap();
    assert!(effects.contains(&Effect::StartTimer {
        timer: Timer::ContactNoticeClear,
        generation,
        delay: Duration::from_millis(3500),
    }));

    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::ContactNoticeClear,
            generation,
        },
    );
    assert!(state.contact.notice_shown_at.is_none());
}

#[test]
fn test_shutdown_cancels_timers_and_freezes_state() {
    let config = Config::default();

    let (state, effects) = transition(&config, State::new(Instant::now()), Event::Shutdown);

    assert!(state.closed);
    assert_eq!(effects, vec![Effect::CancelAllTimers]);

    let (state, effects) = transition(&config, state, Event::PredictClicked);
    assert!(effects.is_empty());
    assert!(state.error_cue.is_none());
}

#[test]
fn test_contact_notice_stays_for_full_duration_after_confirmation() {
    let animated = Config::default();
    let still = Config {
        animations_enabled: false,
        ..Config::default()
    };

    let (_, effects) = transition(&animated, State::new(Instant::now()), Event::ContactSubmitted);
    assert!(effects.contains(&Effect::StartTimer {
        timer: Timer::ContactNoticeClear,
        generation: 1,
        delay: Duration::from_millis(3000) + Duration::from_millis(500),
    }));

    let (_, effects) = transition(&still, State::new(Instant::now()), Event::ContactSubmitted);
    assert!(effects.contains(&Effect::StartTimer {
        timer: Timer::ContactNoticeClear,
        generation: 1,
        delay: Duration::from_millis(3000),
    }));
}

#[test]
fn test_scroll_timer_does_nothing_without_predictions_on_screen() {
    let config = Config::default();
    let (state, _) = transition(&config, loaded_state(&config), Event::PredictClicked);
    let (state, effects) = transition(
        &config,
        state,
        Event::PredictionDone(Ok(PredictionResult::from_pairs([("Healthy", 100.0)]))),
    );
    let generation = started_timer(&effects, Timer::ScrollToResults).unwrap();

    // A new upload hides the results before the scroll timer fires
    let (state, _) = select_leaf(&config, state);
    let (state, _) = transition(
        &config,
        state,
        Event::FileRead {
            file: leaf(),
            result: Ok(FileReaderFake::preview()),
        },
    );
    assert_eq!(state.results, Results::Hidden);

    let (state, _) = transition(
        &config,
        state,
        Event::TimerFired {
            timer: Timer::ScrollToResults,
            generation,
        },
    );
    assert_eq!(state.scroll_requests, 0);

    // Errors never ask for a scroll
    let (state, _) = transition(&config, state, Event::PredictClicked);
    let (state, effects) = transition(
        &config,
        state,
        Event::PredictionDone(Err(PredictError::Status(500))),
    );
    assert!(matches!(state.results, Results::Error { .. }));
    assert!(started_timer(&effects, Timer::ScrollToResults).is_none());
    assert_eq!(state.scroll_requests, 0);
}
