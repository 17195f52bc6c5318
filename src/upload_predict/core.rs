use crate::config::Config;
use crate::file_reader::interface::{FileReadError, PreviewImage, SelectedFile};
use crate::predict_client::interface::{PredictError, PredictionResult};
use crate::upload_predict::motion;
use crate::upload_predict::results::{build_cards, PredictionCard};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    NoFile,
    Uploading {
        file: SelectedFile,
    },
    /// A file is chosen but could not be decoded.
    FileSelected {
        file: SelectedFile,
    },
    Loaded {
        file: SelectedFile,
        preview: PreviewImage,
        shown_at: Instant,
    },
}

impl UploadState {
    pub fn file(&self) -> Option<&SelectedFile> {
        match self {
            UploadState::NoFile => None,
            UploadState::Uploading { file }
            | UploadState::FileSelected { file }
            | UploadState::Loaded { file, .. } => Some(file),
        }
    }

    pub fn has_file(&self) -> bool {
        self.file().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadLabel {
    ChooseImage,
    Uploading,
    ChangeImage,
    UploadFailed,
}

impl UploadLabel {
    pub fn text(&self) -> &'static str {
        match self {
            UploadLabel::ChooseImage => "Choose Image",
            UploadLabel::Uploading => "Uploading...",
            UploadLabel::ChangeImage => "Change Image",
            UploadLabel::UploadFailed => "Upload Failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictControl {
    Ready,
    Busy { since: Instant },
}

impl PredictControl {
    pub fn text(&self) -> &'static str {
        match self {
            PredictControl::Ready => "Predict",
            PredictControl::Busy { .. } => "Analyzing...",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, PredictControl::Busy { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Results {
    Hidden,
    Predictions {
        cards: Vec<PredictionCard>,
        shown_at: Instant,
    },
    Error {
        message: String,
        shown_at: Instant,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub confirmed_at: Option<Instant>,
    pub notice_shown_at: Option<Instant>,
}

impl ContactForm {
    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    UploadLabelRevert,
    ErrorCueClear,
    ScrollToResults,
    ContactNoticeClear,
}

impl Timer {
    fn index(&self) -> usize {
        match self {
            Timer::UploadLabelRevert => 0,
            Timer::ErrorCueClear => 1,
            Timer::ScrollToResults => 2,
            Timer::ContactNoticeClear => 3,
        }
    }

    pub fn delay(&self, config: &Config) -> Duration {
        match self {
            Timer::UploadLabelRevert => config.upload_label_revert_delay,
            Timer::ErrorCueClear => config.error_cue_duration,
            Timer::ScrollToResults => config.scroll_to_results_delay,
            Timer::ContactNoticeClear => {
                // The notice only appears once the confirmation has played
                if config.animations_enabled {
                    config.contact_notice_duration + motion::contact_confirm().duration
                } else {
                    config.contact_notice_duration
                }
            }
        }
    }
}

/// Latest generation issued per timer. A firing timer only counts if its
/// generation is still the latest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerGenerations([u64; 4]);

impl TimerGenerations {
    pub fn current(&self, timer: Timer) -> u64 {
        self.0[timer.index()]
    }

    fn bump(&mut self, timer: Timer) -> u64 {
        self.0[timer.index()] += 1;
        self.0[timer.index()]
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub opened_at: Instant,
    pub upload: UploadState,
    pub upload_label: UploadLabel,
    pub upload_enabled: bool,
    pub predict: PredictControl,
    pub results: Results,
    pub error_cue: Option<Instant>,
    pub scroll_requests: u64,
    pub contact: ContactForm,
    pub timers: TimerGenerations,
    pub closed: bool,
}

impl State {
    pub fn new(opened_at: Instant) -> Self {
        Self {
            opened_at,
            upload: UploadState::NoFile,
            upload_label: UploadLabel::ChooseImage,
            upload_enabled: true,
            predict: PredictControl::Ready,
            results: Results::Hidden,
            error_cue: None,
            scroll_requests: 0,
            contact: ContactForm::default(),
            timers: TimerGenerations::default(),
            closed: false,
        }
    }
}

#[derive(Debug)]
pub enum Event {
    Tick(Instant),
    FilesSelected(Vec<PathBuf>),
    FileRead {
        file: SelectedFile,
        result: Result<PreviewImage, FileReadError>,
    },
    PredictClicked,
    PredictionDone(Result<PredictionResult, PredictError>),
    TimerFired {
        timer: Timer,
        generation: u64,
    },
    ContactEdited {
        field: ContactField,
        value: String,
    },
    ContactSubmitted,
    Shutdown,
}

impl Event {
    pub fn is_tick(&self) -> bool {
        matches!(self, Event::Tick(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeTick,
    ReadFile {
        file: SelectedFile,
    },
    RequestPrediction {
        file: SelectedFile,
    },
    StartTimer {
        timer: Timer,
        generation: u64,
        delay: Duration,
    },
    CancelTimer {
        timer: Timer,
    },
    CancelAllTimers,
    LogError {
        message: String,
    },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::new(Instant::now()), vec![Effect::SubscribeTick])
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    if state.closed {
        return (state, vec![]);
    }

    match event {
        Event::Tick(_) => (state, vec![]),
        Event::FilesSelected(paths) => files_selected(state, paths),
        Event::FileRead { file, result } => file_read(config, state, file, result),
        Event::PredictClicked => predict_clicked(config, state),
        Event::PredictionDone(result) => prediction_done(config, state, result),
        Event::TimerFired { timer, generation } => timer_fired(state, timer, generation),
        Event::ContactEdited { field, value } => {
            let mut state = state;
            state.contact.set(field, value);
            (state, vec![])
        }
        Event::ContactSubmitted => contact_submitted(config, state),
        Event::Shutdown => {
            let mut state = state;
            state.closed = true;
            (state, vec![Effect::CancelAllTimers])
        }
    }
}

fn start_timer(config: &Config, state: &mut State, timer: Timer) -> Effect {
    Effect::StartTimer {
        timer,
        generation: state.timers.bump(timer),
        delay: timer.delay(config),
    }
}

fn cancel_timer(state: &mut State, timer: Timer) -> Effect {
    state.timers.bump(timer);
    Effect::CancelTimer { timer }
}

fn files_selected(mut state: State, paths: Vec<PathBuf>) -> (State, Vec<Effect>) {
    let Some(path) = paths.into_iter().next() else {
        return (state, vec![]);
    };

    let file = SelectedFile::from_path(path);
    state.upload = UploadState::Uploading { file: file.clone() };
    state.upload_label = UploadLabel::Uploading;
    state.upload_enabled = false;

    let cancel = cancel_timer(&mut state, Timer::UploadLabelRevert);

    (state, vec![cancel, Effect::ReadFile { file }])
}

fn file_read(
    config: &Config,
    mut state: State,
    file: SelectedFile,
    result: Result<PreviewImage, FileReadError>,
) -> (State, Vec<Effect>) {
    let is_current = matches!(&state.upload, UploadState::Uploading { file: current } if *current == file);
    if !is_current {
        return (state, vec![]);
    }

    state.upload_enabled = true;

    match result {
        Ok(preview) => {
            state.upload = UploadState::Loaded {
                file,
                preview,
                shown_at: Instant::now(),
            };
            state.upload_label = UploadLabel::ChangeImage;
            state.results = Results::Hidden;
            (state, vec![])
        }
        Err(_) => {
            state.upload = UploadState::FileSelected { file };
            state.upload_label = UploadLabel::UploadFailed;
            let revert = start_timer(config, &mut state, Timer::UploadLabelRevert);
            (state, vec![revert])
        }
    }
}

fn predict_clicked(config: &Config, mut state: State) -> (State, Vec<Effect>) {
    let Some(file) = state.upload.file().cloned() else {
        state.error_cue = Some(Instant::now());
        let clear = start_timer(config, &mut state, Timer::ErrorCueClear);
        return (state, vec![clear]);
    };

    if state.predict.is_busy() {
        return (state, vec![]);
    }

    state.predict = PredictControl::Busy {
        since: Instant::now(),
    };

    (state, vec![Effect::RequestPrediction { file }])
}

fn prediction_done(
    config: &Config,
    mut state: State,
    result: Result<PredictionResult, PredictError>,
) -> (State, Vec<Effect>) {
    if !state.predict.is_busy() {
        return (state, vec![]);
    }

    state.predict = PredictControl::Ready;

    match result {
        Ok(predictions) => {
            state.results = Results::Predictions {
                cards: build_cards(&predictions),
                shown_at: Instant::now(),
            };
            let scroll = start_timer(config, &mut state, Timer::ScrollToResults);
            (state, vec![scroll])
        }
        Err(e) => {
            state.results = Results::Error {
                message: config.prediction_error_message.clone(),
                shown_at: Instant::now(),
            };
            (
                state,
                vec![Effect::LogError {
                    message: format!("Prediction error: {}", e),
                }],
            )
        }
    }
}

fn timer_fired(mut state: State, timer: Timer, generation: u64) -> (State, Vec<Effect>) {
    if state.timers.current(timer) != generation {
        return (state, vec![]);
    }

    match timer {
        Timer::UploadLabelRevert => state.upload_label = UploadLabel::ChooseImage,
        Timer::ErrorCueClear => state.error_cue = None,
        Timer::ScrollToResults => {
            if !matches!(state.results, Results::Hidden) {
                state.scroll_requests += 1;
            }
        }
        Timer::ContactNoticeClear => state.contact.notice_shown_at = None,
    }

    (state, vec![])
}

fn contact_submitted(config: &Config, mut state: State) -> (State, Vec<Effect>) {
    let now = Instant::now();
    state.contact.confirmed_at = Some(now);
    state.contact.notice_shown_at = Some(now);
    state.contact.reset_fields();

    let clear = start_timer(config, &mut state, Timer::ContactNoticeClear);

    (state, vec![clear])
}
