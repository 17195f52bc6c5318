pub mod impl_none;
pub mod impl_tween;
pub mod interface;

use crate::config::Config;
use crate::library::logger::interface::Logger;
use impl_none::AnimatorNone;
use impl_tween::AnimatorTween;
use interface::Animator;
use std::sync::Arc;

/// Picks the animator once at start-up.
pub fn detect(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn Animator + Send + Sync> {
    let animator: Arc<dyn Animator + Send + Sync> = if config.animations_enabled {
        Arc::new(AnimatorTween::new())
    } else {
        Arc::new(AnimatorNone::new())
    };

    let _ = logger
        .with_namespace("animation")
        .info(&format!("Using {} animator", animator.name()));

    animator
}
