//! Minimal width/height resolution for the view
//!
//! The host states a constraint per axis; the view resolves it against the
//! intrinsic size of its background (zero when there is none).

use crate::error::ViewError;
use crate::math::Vec2;

/// Per-axis size constraint from the host layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureMode {
    /// No constraint: use the intrinsic size
    Unspecified,
    /// Intrinsic size, capped at the given size
    AtMost(f32),
    /// Exactly the given size
    Exactly(f32),
}

impl MeasureMode {
    /// Parse a mode name as passed from JavaScript
    pub fn parse(name: &str, size: f32) -> Result<Self, ViewError> {
        match name {
            "unspecified" => Ok(Self::Unspecified),
            "at_most" | "at-most" => Ok(Self::AtMost(size)),
            "exactly" => Ok(Self::Exactly(size)),
            other => Err(ViewError::UnknownMeasureMode(other.to_string())),
        }
    }

    /// Resolve this axis against an intrinsic size
    pub fn resolve(self, intrinsic: f32) -> f32 {
        match self {
            Self::Unspecified => intrinsic,
            Self::AtMost(limit) => intrinsic.min(limit),
            Self::Exactly(size) => size,
        }
    }
}

/// Resolved view size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredSize {
    pub width: f32,
    pub height: f32,
}

impl MeasuredSize {
    /// Center of the drawing area; the arrow rests here after a resize
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Resolve both axes. `background` is the background's intrinsic size, if any.
pub fn measure(width: MeasureMode, height: MeasureMode, background: Option<Vec2>) -> MeasuredSize {
    let intrinsic = background.unwrap_or(Vec2::ZERO);
    MeasuredSize {
        width: width.resolve(intrinsic.x),
        height: height.resolve(intrinsic.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_ignores_background() {
        let size = measure(
            MeasureMode::Exactly(320.0),
            MeasureMode::Exactly(480.0),
            Some(Vec2::new(64.0, 64.0)),
        );
        assert_eq!(size, MeasuredSize { width: 320.0, height: 480.0 });
        assert_eq!(size.center(), Vec2::new(160.0, 240.0));
    }

    #[test]
    fn test_at_most_caps_background() {
        let size = measure(
            MeasureMode::AtMost(100.0),
            MeasureMode::AtMost(500.0),
            Some(Vec2::new(200.0, 300.0)),
        );
        assert_eq!(size.width, 100.0);
        assert_eq!(size.height, 300.0);
    }

    #[test]
    fn test_unspecified_without_background_is_zero() {
        let size = measure(MeasureMode::Unspecified, MeasureMode::Unspecified, None);
        assert_eq!(size, MeasuredSize { width: 0.0, height: 0.0 });
        assert_eq!(size.center(), Vec2::ZERO);
    }

    #[test]
    fn test_mixed_modes() {
        let size = measure(
            MeasureMode::Unspecified,
            MeasureMode::Exactly(90.0),
            Some(Vec2::new(42.0, 10.0)),
        );
        assert_eq!(size.width, 42.0);
        assert_eq!(size.height, 90.0);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!(MeasureMode::parse("unspecified", 5.0).unwrap(), MeasureMode::Unspecified);
        assert_eq!(MeasureMode::parse("at_most", 5.0).unwrap(), MeasureMode::AtMost(5.0));
        assert_eq!(MeasureMode::parse("exactly", 7.0).unwrap(), MeasureMode::Exactly(7.0));
        assert!(matches!(
            MeasureMode::parse("wrap_content", 1.0),
            Err(ViewError::UnknownMeasureMode(_))
        ));
    }
}
