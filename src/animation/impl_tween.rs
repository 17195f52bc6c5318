use crate::animation::interface::{Animator, Repeat, Tween};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct AnimatorTween;

impl AnimatorTween {
    pub fn new() -> Self {
        Self
    }
}

impl Animator for AnimatorTween {
    fn name(&self) -> &'static str {
        "tween"
    }

    fn value_at(&self, tween: &Tween, elapsed: Duration) -> f32 {
        if elapsed < tween.delay {
            return tween.start_value();
        }

        let running = (elapsed - tween.delay).as_secs_f32();
        let duration = tween.duration.as_secs_f32();
        if duration <= 0.0 {
            return tween.resting_value();
        }

        let cycles = running / duration;
        let t = match tween.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Forever => cycles.fract(),
            Repeat::ForeverYoyo => {
                if (cycles.floor() as u64) % 2 == 0 {
                    cycles.fract()
                } else {
                    1.0 - cycles.fract()
                }
            }
        };

        tween.sample(tween.ease.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::interface::Ease;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_holds_start_value_during_delay() {
        let tween = Tween::new(0.0, 80.0, ms(1000)).with_delay(ms(400));

        assert_eq!(AnimatorTween.value_at(&tween, ms(0)), 0.0);
        assert_eq!(AnimatorTween.value_at(&tween, ms(399)), 0.0);
    }

    #[test]
    fn test_linear_progress_and_finish() {
        let tween = Tween::new(0.0, 80.0, ms(1000));

        assert!((AnimatorTween.value_at(&tween, ms(500)) - 40.0).abs() < 1e-3);
        assert_eq!(AnimatorTween.value_at(&tween, ms(1000)), 80.0);
        assert_eq!(AnimatorTween.value_at(&tween, ms(5000)), 80.0);
    }

    #[test]
    fn test_back_out_overshoots_then_settles() {
        let tween = Tween::new(0.8, 1.0, ms(800)).with_ease(Ease::BackOut { overshoot: 1.2 });

        let peak = (1..80)
            .map(|i| AnimatorTween.value_at(&tween, ms(i * 10)))
            .fold(f32::MIN, f32::max);

        assert!(peak > 1.0);
        assert!((AnimatorTween.value_at(&tween, ms(800)) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_elastic_out_ends_on_target() {
        let tween = Tween::new(0.0, 87.5, ms(1500)).with_ease(Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        });

        assert_eq!(AnimatorTween.value_at(&tween, ms(0)), 0.0);
        assert_eq!(AnimatorTween.value_at(&tween, ms(1500)), 87.5);
    }

    #[test]
    fn test_keyframes_walk_each_segment() {
        let shake = Tween::keyframes(vec![0.0, -5.0, 5.0, -5.0, 5.0, 0.0], ms(500));

        assert!((AnimatorTween.value_at(&shake, ms(100)) - -5.0).abs() < 1e-3);
        assert!((AnimatorTween.value_at(&shake, ms(200)) - 5.0).abs() < 1e-3);
        assert_eq!(AnimatorTween.value_at(&shake, ms(500)), 0.0);
    }

    #[test]
    fn test_yoyo_reverses_every_other_cycle() {
        let float = Tween::new(0.0, -5.0, ms(1000)).with_repeat(Repeat::ForeverYoyo);

        assert!((AnimatorTween.value_at(&float, ms(500)) - -2.5).abs() < 1e-3);
        assert!((AnimatorTween.value_at(&float, ms(1250)) - -3.75).abs() < 1e-3);
        assert!((AnimatorTween.value_at(&float, ms(2000)) - 0.0).abs() < 1e-3);
    }

    #[test]
    fn test_ease_endpoints() {
        let eases = [
            Ease::Linear,
            Ease::BackOut { overshoot: 1.2 },
            Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5,
            },
            Ease::Power1InOut,
            Ease::Power2Out,
            Ease::SineInOut,
        ];

        for ease in eases {
            assert!(ease.apply(0.0).abs() < 1e-5, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", ease);
        }
    }
}
