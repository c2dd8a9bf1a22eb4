//! Animation module for the arrow's pointer tracking
//!
//! Eases position and heading toward the last pointer target
//! with first-order exponential smoothing, one step per frame.

mod easing_animator;
mod easing;

pub use easing_animator::{
    AnimationState, EasingAnimator, DEFAULT_FACTOR, DEFAULT_TOLERANCE,
};
pub use easing::{approach, exceeds_tolerance};
