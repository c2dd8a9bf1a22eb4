use crate::math::Vec2;

/// Where and how to draw the icon on the surface.
///
/// Applied in order: translate to `translate`, then rotate by
/// `rotation_degrees` about `pivot` (in icon-local coordinates), then draw
/// the icon with its top-left corner at the local origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconTransform {
    pub translate: Vec2,
    pub pivot: Vec2,
    pub rotation_degrees: f32,
}

impl IconTransform {
    /// Transform that centers an `icon_size` icon on `position`
    pub fn for_icon(
        position: Vec2,
        rotation_degrees: f32,
        icon_size: Vec2,
        rotation_offset_degrees: f32,
    ) -> Self {
        let half = icon_size.scale(0.5);
        Self {
            translate: position - half,
            pivot: half,
            rotation_degrees: rotation_degrees + rotation_offset_degrees,
        }
    }

    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    /// Map an icon-local point to surface coordinates
    pub fn apply(&self, local: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation_radians().sin_cos();
        let d = local - self.pivot;
        let rotated = Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
        self.translate + self.pivot + rotated
    }
}
