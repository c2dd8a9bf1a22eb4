use std::cell::Cell;
use crate::error::ViewError;

/// Host redraw queue: a fire-and-forget request for one more frame
pub trait FrameScheduler {
    fn request_frame(&self) -> Result<(), ViewError>;
}

/// Schedules frames through `window.requestAnimationFrame`.
///
/// Requests made while one is already pending are coalesced; the host callback
/// must call [`AnimationFrameScheduler::frame_started`] (the view does this in
/// `render`) so the next request goes through.
pub struct AnimationFrameScheduler {
    callback: js_sys::Function,
    pending: Cell<bool>,
}

impl AnimationFrameScheduler {
    pub fn new(callback: js_sys::Function) -> Self {
        Self {
            callback,
            pending: Cell::new(false),
        }
    }

    pub fn frame_started(&self) {
        self.pending.set(false);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self) -> Result<(), ViewError> {
        if self.pending.get() {
            return Ok(());
        }

        let window = web_sys::window().ok_or(ViewError::NoWindow)?;
        window
            .request_animation_frame(&self.callback)
            .map_err(|e| ViewError::js("requestAnimationFrame", e))?;
        self.pending.set(true);
        Ok(())
    }
}
