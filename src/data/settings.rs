use serde::{Deserialize, Serialize};
use crate::animation::{DEFAULT_FACTOR, DEFAULT_TOLERANCE};
use crate::error::ViewError;

/// Tunables for the arrow view, loadable from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Fraction of the remaining distance covered per frame, in (0, 1]
    pub factor: f32,
    /// Per-channel convergence tolerance
    pub tolerance: f32,
    /// Added to the heading when drawing. The stock arrow artwork points up,
    /// so 90 turns a heading of 0 into "pointing right".
    pub rotation_offset_degrees: f32,
    /// CSS color filled behind the arrow each frame; transparent when unset
    pub background: Option<String>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
            tolerance: DEFAULT_TOLERANCE,
            rotation_offset_degrees: 90.0,
            background: None,
        }
    }
}

impl ViewSettings {
    /// Parse from YAML string; missing fields keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, ViewError> {
        let settings: ViewSettings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: factor={} tolerance={} offset={}",
            settings.factor,
            settings.tolerance,
            settings.rotation_offset_degrees
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ViewError> {
        if !(self.factor > 0.0 && self.factor <= 1.0) {
            return Err(ViewError::InvalidSetting {
                field: "factor",
                reason: format!("{} is outside (0, 1]", self.factor),
            });
        }

        // A zero tolerance can never be reached once f32 steps stall
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ViewError::InvalidSetting {
                field: "tolerance",
                reason: format!("{} is not a positive finite number", self.tolerance),
            });
        }

        if !self.rotation_offset_degrees.is_finite() {
            return Err(ViewError::InvalidSetting {
                field: "rotation_offset_degrees",
                reason: "must be finite".to_string(),
            });
        }

        if matches!(&self.background, Some(color) if color.trim().is_empty()) {
            return Err(ViewError::InvalidSetting {
                field: "background",
                reason: "empty color".to_string(),
            });
        }

        Ok(())
    }
}
