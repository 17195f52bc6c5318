use crate::animation::interface::{Ease, Repeat, Tween};
use std::time::Duration;

const BACK_OUT: Ease = Ease::BackOut { overshoot: 1.2 };

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn stagger(index: usize) -> Duration {
    ms(100) * index as u32
}

pub fn intro_navbar() -> Tween {
    Tween::new(-5.0, 0.0, ms(1000))
        .with_delay(ms(100))
        .with_ease(BACK_OUT)
}

pub fn intro_main() -> Tween {
    Tween::new(5.0, 0.0, ms(1000))
        .with_delay(ms(100))
        .with_ease(BACK_OUT)
}

pub fn contact_field_entrance(index: usize) -> Tween {
    Tween::new(10.0, 0.0, ms(500))
        .with_delay(stagger(index))
        .with_ease(Ease::Power2Out)
}

pub fn preview_entrance() -> Tween {
    Tween::new(0.8, 1.0, ms(800)).with_ease(BACK_OUT)
}

pub fn preview_float() -> Tween {
    Tween::new(0.0, -5.0, ms(2000))
        .with_ease(Ease::SineInOut)
        .with_repeat(Repeat::ForeverYoyo)
}

pub fn upload_pulse() -> Tween {
    Tween::keyframes(vec![1.0, 1.03, 1.0], ms(1500)).with_repeat(Repeat::Forever)
}

pub fn upload_shake() -> Tween {
    Tween::keyframes(vec![0.0, -5.0, 5.0, -5.0, 5.0, 0.0], ms(500)).with_ease(Ease::Power1InOut)
}

pub fn predict_error_pulse() -> Tween {
    Tween::keyframes(vec![1.0, 1.1, 1.0], ms(500))
}

pub fn results_entrance() -> Tween {
    Tween::new(30.0, 0.0, ms(800)).with_ease(Ease::Power2Out)
}

pub fn error_pop() -> Tween {
    Tween::new(0.8, 1.0, ms(500)).with_ease(BACK_OUT)
}

pub fn card_entrance(rank: usize) -> Tween {
    Tween::new(30.0, 0.0, ms(600))
        .with_delay(stagger(rank))
        .with_ease(BACK_OUT)
}

/// Width in percent. Starts 0.1s after the card is inserted, then waits
/// another 0.3s plus the rank stagger.
pub fn card_progress(rank: usize, probability: f64) -> Tween {
    Tween::new(0.0, probability as f32, ms(1500))
        .with_delay(ms(100) + ms(300) + stagger(rank))
        .with_ease(Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        })
}

pub fn contact_confirm() -> Tween {
    Tween::keyframes(vec![1.0, 0.9, 1.0], ms(500))
}

/// Fades the notice in once the confirmation has played.
pub fn contact_notice() -> Tween {
    Tween::new(0.0, 1.0, ms(300)).with_delay(contact_confirm().duration)
}
