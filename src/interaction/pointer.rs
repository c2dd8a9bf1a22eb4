use crate::animation::EasingAnimator;
use crate::math::Vec2;

/// Pointer actions the arrow reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
    /// Hover enter/leave, wheel and anything else; ignored
    Other,
}

impl PointerAction {
    /// Map a DOM event type (pointer, mouse or touch) to an action
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            "pointerdown" | "mousedown" | "touchstart" => Self::Down,
            "pointermove" | "mousemove" | "touchmove" => Self::Move,
            "pointerup" | "mouseup" | "touchend" => Self::Up,
            "pointercancel" | "touchcancel" => Self::Cancel,
            _ => Self::Other,
        }
    }

    /// Whether this action moves the arrow's destination
    pub fn retargets(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Destination handed to the animator for a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTarget {
    pub position: Vec2,
    pub rotation_degrees: f32,
}

impl PointerTarget {
    /// Target for a pointer at `pointer`, heading measured from `from`
    pub fn toward(from: Vec2, pointer: Vec2) -> Self {
        Self {
            position: pointer,
            rotation_degrees: from.heading_degrees(&pointer),
        }
    }
}

/// Retarget the animator from a pointer event.
///
/// The heading is measured from the *current* position, not the previous
/// destination, so a drag keeps re-aiming while the arrow is still moving.
/// Returns the new target, or `None` when the action is ignored.
pub fn retarget(
    animator: &mut EasingAnimator,
    action: PointerAction,
    pointer: Vec2,
) -> Option<PointerTarget> {
    if !action.retargets() {
        return None;
    }

    let current = animator.current_position();
    let target = PointerTarget::toward(current, pointer);
    animator.set_destination(target.position.x, target.position.y, target.rotation_degrees);
    log::debug!(
        "{:?} at ({:.1}, {:.1}) -> heading {:.1}, {:.1}px away",
        action,
        pointer.x,
        pointer.y,
        target.rotation_degrees,
        current.distance(&pointer)
    );
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_mapping() {
        assert_eq!(PointerAction::from_event_type("pointerdown"), PointerAction::Down);
        assert_eq!(PointerAction::from_event_type("touchstart"), PointerAction::Down);
        assert_eq!(PointerAction::from_event_type("mousemove"), PointerAction::Move);
        assert_eq!(PointerAction::from_event_type("pointerup"), PointerAction::Up);
        assert_eq!(PointerAction::from_event_type("touchcancel"), PointerAction::Cancel);
        assert_eq!(PointerAction::from_event_type("pointerenter"), PointerAction::Other);
        assert_eq!(PointerAction::from_event_type("wheel"), PointerAction::Other);
    }

    #[test]
    fn test_all_touch_phases_retarget() {
        for action in [
            PointerAction::Down,
            PointerAction::Move,
            PointerAction::Up,
            PointerAction::Cancel,
        ] {
            assert!(action.retargets(), "{:?} should retarget", action);
        }
        assert!(!PointerAction::Other.retargets());
    }

    #[test]
    fn test_retarget_diagonal() {
        let mut anim = EasingAnimator::new();
        anim.initialize(0.0, 0.0);

        let target = retarget(&mut anim, PointerAction::Down, Vec2::new(10.0, 10.0))
            .expect("down should retarget");

        assert!((target.rotation_degrees - 45.0).abs() < 0.0001);
        assert_eq!(anim.destination_position(), Vec2::new(10.0, 10.0));
        assert!((anim.destination_rotation() - 45.0).abs() < 0.0001);
    }

    #[test]
    fn test_ignored_action_keeps_destination() {
        let mut anim = EasingAnimator::new();
        anim.initialize(50.0, 50.0);

        assert!(retarget(&mut anim, PointerAction::Other, Vec2::new(0.0, 0.0)).is_none());
        assert_eq!(anim.destination_position(), Vec2::new(50.0, 50.0));
        assert!(anim.is_converged());
    }

    #[test]
    fn test_heading_uses_current_position() {
        let mut anim = EasingAnimator::new();
        anim.initialize(0.0, 0.0);
        retarget(&mut anim, PointerAction::Down, Vec2::new(100.0, 0.0));
        anim.tick(); // current x = 10

        // Pointer straight below the current position, not the destination
        let target = retarget(&mut anim, PointerAction::Move, Vec2::new(10.0, 50.0))
            .expect("move should retarget");
        assert!((target.rotation_degrees - 90.0).abs() < 0.001);
    }
}
