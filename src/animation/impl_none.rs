use crate::animation::interface::{Animator, Tween};
use std::time::Duration;

/// Used when animations are unavailable: every property jumps straight to
/// its resting value.
#[derive(Debug, Clone, Default)]
pub struct AnimatorNone;

impl AnimatorNone {
    pub fn new() -> Self {
        Self
    }
}

impl Animator for AnimatorNone {
    fn name(&self) -> &'static str {
        "none"
    }

    fn value_at(&self, tween: &Tween, _elapsed: Duration) -> f32 {
        tween.resting_value()
    }
}
