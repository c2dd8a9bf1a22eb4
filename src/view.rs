//! Toolkit-agnostic arrow view
//!
//! Composes the animator with a drawing surface and an optional frame
//! scheduler. The wasm facade in the crate root is a thin shell around it.

use crate::animation::EasingAnimator;
use crate::data::ViewSettings;
use crate::error::ViewError;
use crate::interaction::{retarget, PointerAction, PointerTarget};
use crate::layout::{measure, MeasureMode, MeasuredSize};
use crate::math::Vec2;
use crate::render::{paint_frame, FrameScheduler, IconSurface};

/// Arrow widget logic over any [`IconSurface`]
pub struct ArrowController<S: IconSurface> {
    surface: S,
    animator: EasingAnimator,
    settings: ViewSettings,
    size: MeasuredSize,
}

impl<S: IconSurface> ArrowController<S> {
    pub fn new(surface: S, settings: ViewSettings) -> Self {
        Self {
            surface,
            animator: EasingAnimator::with_params(settings.factor, settings.tolerance),
            settings,
            size: MeasuredSize { width: 0.0, height: 0.0 },
        }
    }

    /// Resolve the view size and re-center the arrow at rest
    pub fn measure(
        &mut self,
        width: MeasureMode,
        height: MeasureMode,
        background: Option<Vec2>,
    ) -> MeasuredSize {
        self.size = measure(width, height, background);
        let center = self.size.center();
        self.animator.initialize(center.x, center.y);
        log::info!(
            "Measured {}x{}, arrow centered at ({}, {})",
            self.size.width,
            self.size.height,
            center.x,
            center.y
        );
        self.size
    }

    /// Handle a pointer event; asks for a redraw when the arrow was retargeted
    pub fn on_pointer(
        &mut self,
        action: PointerAction,
        pointer: Vec2,
        scheduler: Option<&dyn FrameScheduler>,
    ) -> Result<Option<PointerTarget>, ViewError> {
        let target = retarget(&mut self.animator, action, pointer);
        if target.is_some() {
            if let Some(scheduler) = scheduler {
                scheduler.request_frame()?;
            }
        }
        Ok(target)
    }

    /// Tick, paint, and schedule the next frame while still moving.
    ///
    /// Returns whether more frames are needed.
    pub fn render(&mut self, scheduler: Option<&dyn FrameScheduler>) -> Result<bool, ViewError> {
        let has_more_frames = paint_frame(
            &mut self.animator,
            &mut self.surface,
            self.settings.rotation_offset_degrees,
        )?;

        if has_more_frames {
            if let Some(scheduler) = scheduler {
                scheduler.request_frame()?;
            }
        } else {
            log::debug!("Arrow settled");
        }
        Ok(has_more_frames)
    }

    /// Swap settings; the current transform is kept, only tunables change
    pub fn apply_settings(&mut self, settings: ViewSettings) {
        self.animator.set_params(settings.factor, settings.tolerance);
        self.settings = settings;
    }

    pub fn animator(&self) -> &EasingAnimator {
        &self.animator
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn size(&self) -> MeasuredSize {
        self.size
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
