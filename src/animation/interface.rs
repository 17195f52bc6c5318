use std::f32::consts::PI;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    BackOut { overshoot: f32 },
    ElasticOut { amplitude: f32, period: f32 },
    Power1InOut,
    Power2Out,
    SineInOut,
}

impl Ease {
    /// Maps linear progress in `0..=1` onto the eased curve. Back and elastic
    /// curves overshoot past 1 on purpose.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::BackOut { overshoot } => {
                let t = t - 1.0;
                t * t * ((overshoot + 1.0) * t + overshoot) + 1.0
            }
            Ease::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let amplitude = amplitude.max(1.0);
                let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
            }
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
    ForeverYoyo,
}

/// A single animated property: a path of keyframe values walked over
/// `duration` after `delay`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub keyframes: Vec<f32>,
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self::keyframes(vec![from, to], duration)
    }

    pub fn keyframes(keyframes: Vec<f32>, duration: Duration) -> Self {
        Self {
            keyframes,
            duration,
            delay: Duration::ZERO,
            ease: Ease::Linear,
            repeat: Repeat::Once,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn start_value(&self) -> f32 {
        self.keyframes.first().copied().unwrap_or_default()
    }

    /// Value the property holds when nothing is animating it.
    pub fn resting_value(&self) -> f32 {
        match self.repeat {
            Repeat::Once => self.keyframes.last().copied().unwrap_or_default(),
            Repeat::Forever | Repeat::ForeverYoyo => self.start_value(),
        }
    }

    /// Walks the keyframe path; `p` outside `0..=1` extrapolates the end segments.
    pub fn sample(&self, p: f32) -> f32 {
        match self.keyframes.len() {
            0 => 0.0,
            1 => self.keyframes[0],
            len => {
                let segments = (len - 1) as f32;
                let position = p * segments;
                let index = (position.floor() as isize).clamp(0, len as isize - 2) as usize;
                let local = position - index as f32;
                let (a, b) = (self.keyframes[index], self.keyframes[index + 1]);
                a + (b - a) * local
            }
        }
    }
}

pub trait Animator {
    fn name(&self) -> &'static str;

    /// Current value of `tween` at `elapsed` since it started.
    fn value_at(&self, tween: &Tween, elapsed: Duration) -> f32;
}
