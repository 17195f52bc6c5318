use crate::animation::interface::{Animator, Tween};
use crate::config::Config;
use crate::display::interface::{
    ButtonView, CardView, ContactView, Display, NoticeView, Page, PreviewView, ResultsView,
    UploadContainerView,
};
use crate::upload_predict::core::{PredictControl, Results, State, UploadState};
use crate::upload_predict::motion;
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Clone)]
pub struct Render {
    display: Arc<Mutex<dyn Display + Send + Sync>>,
    animator: Arc<dyn Animator + Send + Sync>,
    config: Config,
}

impl Render {
    pub fn new(
        display: Arc<Mutex<dyn Display + Send + Sync>>,
        animator: Arc<dyn Animator + Send + Sync>,
        config: Config,
    ) -> Self {
        Self {
            display,
            animator,
            config,
        }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let page = page(&self.config, self.animator.as_ref(), state, Instant::now());
        let mut display = self.display.lock().map_err(|e| e.to_string())?;
        display.show(&page)
    }
}

struct Clock<'a> {
    animator: &'a (dyn Animator + Send + Sync),
    now: Instant,
}

impl Clock<'_> {
    fn value(&self, tween: &Tween, started: Instant) -> f32 {
        self.animator
            .value_at(tween, self.now.saturating_duration_since(started))
    }

    fn value_or(&self, tween: &Tween, started: Option<Instant>, idle: f32) -> f32 {
        match started {
            Some(started) => self.value(tween, started),
            None => idle,
        }
    }
}

/// Projects the state onto a drawable page at `now`.
pub fn page(
    config: &Config,
    animator: &(dyn Animator + Send + Sync),
    state: &State,
    now: Instant,
) -> Page {
    let clock = Clock { animator, now };
    let opened = Some(state.opened_at);

    let busy_since = match state.predict {
        PredictControl::Busy { since } => Some(since),
        PredictControl::Ready => None,
    };

    Page {
        navbar_offset_y: clock.value(&motion::intro_navbar(), state.opened_at),
        main_offset_y: clock.value(&motion::intro_main(), state.opened_at),
        upload_button: ButtonView {
            label: state.upload_label.text().to_string(),
            enabled: state.upload_enabled,
            offset_x: clock.value_or(&motion::upload_shake(), state.error_cue, 0.0),
            scale: 1.0,
            error_highlight: state.error_cue.is_some(),
        },
        predict_button: ButtonView {
            label: state.predict.text().to_string(),
            enabled: busy_since.is_none(),
            offset_x: 0.0,
            scale: clock.value_or(&motion::predict_error_pulse(), state.error_cue, 1.0),
            error_highlight: state.error_cue.is_some(),
        },
        upload_container: UploadContainerView {
            has_file: state.upload.has_file(),
            pulse_scale: clock.value_or(&motion::upload_pulse(), busy_since, 1.0),
        },
        preview: match &state.upload {
            UploadState::Loaded {
                preview, shown_at, ..
            } => Some(PreviewView {
                image: preview.clone(),
                scale: clock.value(&motion::preview_entrance(), *shown_at),
                offset_y: clock.value(&motion::preview_float(), *shown_at),
            }),
            _ => None,
        },
        results: match &state.results {
            Results::Hidden => ResultsView::Hidden,
            Results::Predictions { cards, shown_at } => ResultsView::Predictions {
                offset_y: clock.value(&motion::results_entrance(), *shown_at),
                cards: cards
                    .iter()
                    .map(|card| CardView {
                        label: card.label.clone(),
                        percent: card.percent.clone(),
                        top: card.top,
                        offset_y: clock.value(&card.entrance, *shown_at),
                        progress_width: clock.value(&card.progress, *shown_at).clamp(0.0, 100.0),
                        target_width: card.progress.resting_value().clamp(0.0, 100.0),
                    })
                    .collect(),
            },
            Results::Error { message, shown_at } => ResultsView::Error {
                message: message.clone(),
                scale: clock.value(&motion::error_pop(), *shown_at),
            },
        },
        scroll_generation: state.scroll_requests,
        contact: ContactView {
            name: state.contact.name.clone(),
            email: state.contact.email.clone(),
            message: state.contact.message.clone(),
            field_offsets: [0, 1, 2]
                .map(|index| clock.value_or(&motion::contact_field_entrance(index), opened, 0.0)),
            submit_scale: clock.value_or(&motion::contact_confirm(), state.contact.confirmed_at, 1.0),
            notice: state.contact.notice_shown_at.map(|shown_at| NoticeView {
                message: config.contact_notice_message.clone(),
                opacity: clock.value(&motion::contact_notice(), shown_at),
            }),
        },
    }
}
