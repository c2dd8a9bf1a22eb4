use crate::animation::EasingAnimator;
use crate::error::ViewError;
use crate::math::Vec2;
use super::transform::IconTransform;

/// A 2D surface that can draw the arrow icon at a transform
pub trait IconSurface {
    /// Intrinsic icon size, or `None` when no icon is available
    fn icon_size(&self) -> Option<Vec2>;

    /// Clear the surface before a new frame
    fn clear(&mut self) -> Result<(), ViewError>;

    /// Draw the icon; only called when `icon_size` is `Some`
    fn draw_icon(&mut self, transform: &IconTransform) -> Result<(), ViewError>;
}

/// Advance the animator one frame and paint the result.
///
/// Returns whether the caller must schedule another frame. A surface without
/// an icon still advances the animation but draws nothing.
pub fn paint_frame<S: IconSurface>(
    animator: &mut EasingAnimator,
    surface: &mut S,
    rotation_offset_degrees: f32,
) -> Result<bool, ViewError> {
    let has_more_frames = animator.tick();

    surface.clear()?;
    if let Some(icon_size) = surface.icon_size() {
        let transform = IconTransform::for_icon(
            animator.current_position(),
            animator.current_rotation(),
            icon_size,
            rotation_offset_degrees,
        );
        surface.draw_icon(&transform)?;
    }

    Ok(has_more_frames)
}
