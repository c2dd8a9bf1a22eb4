//! Pointer-tracking easing animation
//!
//! Position and rotation relax toward their destinations together:
//! - one proportional step per frame, shared by all three channels
//! - converged once every channel is within tolerance
//! - rotation is raw degrees, never wrapped into [-180, 180)

use super::easing::{approach, exceeds_tolerance};
use crate::math::Vec2;

/// Fraction of the remaining distance covered per tick
pub const DEFAULT_FACTOR: f32 = 0.1;
/// Per-channel distance below which the animation is settled
pub const DEFAULT_TOLERANCE: f32 = 0.01;

/// Current and destination transform of the tracked icon
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub current_position: Vec2,
    pub destination_position: Vec2,
    /// Current heading in degrees
    pub current_rotation: f32,
    /// Destination heading in degrees
    pub destination_rotation: f32,
}

impl AnimationState {
    /// State resting at `center` with zero rotation
    pub fn at_rest(center: Vec2) -> Self {
        Self {
            current_position: center,
            destination_position: center,
            current_rotation: 0.0,
            destination_rotation: 0.0,
        }
    }
}

/// Exponential-smoothing animator driven by the host's render loop
#[derive(Debug, Clone)]
pub struct EasingAnimator {
    state: AnimationState,
    factor: f32,
    tolerance: f32,
}

impl Default for EasingAnimator {
    fn default() -> Self {
        Self::with_params(DEFAULT_FACTOR, DEFAULT_TOLERANCE)
    }
}

impl EasingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an animator with a custom step factor and tolerance
    pub fn with_params(factor: f32, tolerance: f32) -> Self {
        Self {
            state: AnimationState::default(),
            factor,
            tolerance,
        }
    }

    /// Place the icon at rest at `(center_x, center_y)`, rotation 0.
    ///
    /// Called whenever the drawing surface gets a new size.
    pub fn initialize(&mut self, center_x: f32, center_y: f32) {
        self.state = AnimationState::at_rest(Vec2::new(center_x, center_y));
    }

    /// Retarget the animation; the current transform is left untouched
    pub fn set_destination(&mut self, x: f32, y: f32, rotation_degrees: f32) {
        self.state.destination_position = Vec2::new(x, y);
        self.state.destination_rotation = rotation_degrees;
    }

    /// Advance one frame. Returns true while more frames are needed.
    pub fn tick(&mut self) -> bool {
        let s = &mut self.state;
        s.current_position.x = approach(s.current_position.x, s.destination_position.x, self.factor);
        s.current_position.y = approach(s.current_position.y, s.destination_position.y, self.factor);
        s.current_rotation = approach(s.current_rotation, s.destination_rotation, self.factor);

        let has_more_frames = self.has_more_frames();
        log::trace!(
            "tick: pos=({:.2}, {:.2}) rot={:.2} more={}",
            self.state.current_position.x,
            self.state.current_position.y,
            self.state.current_rotation,
            has_more_frames
        );
        has_more_frames
    }

    /// Whether any channel is still more than the tolerance from its destination
    pub fn has_more_frames(&self) -> bool {
        let s = &self.state;
        exceeds_tolerance(s.current_position.x, s.destination_position.x, self.tolerance)
            || exceeds_tolerance(s.current_position.y, s.destination_position.y, self.tolerance)
            || exceeds_tolerance(s.current_rotation, s.destination_rotation, self.tolerance)
    }

    pub fn is_converged(&self) -> bool {
        !self.has_more_frames()
    }

    /// Change the step factor and tolerance without disturbing the state
    pub fn set_params(&mut self, factor: f32, tolerance: f32) {
        self.factor = factor;
        self.tolerance = tolerance;
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn current_position(&self) -> Vec2 {
        self.state.current_position
    }

    pub fn current_rotation(&self) -> f32 {
        self.state.current_rotation
    }

    pub fn destination_position(&self) -> Vec2 {
        self.state.destination_position
    }

    pub fn destination_rotation(&self) -> f32 {
        self.state.destination_rotation
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }
}
