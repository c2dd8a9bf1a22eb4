use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

pub mod animation;
pub mod data;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod math;
pub mod render;
pub mod view;

pub use animation::{AnimationState, EasingAnimator};
pub use error::ViewError;
pub use view::ArrowController;

use data::ViewSettings;
use interaction::PointerAction;
use layout::MeasureMode;
use math::Vec2;
use render::{AnimationFrameScheduler, CanvasSurface, FrameScheduler};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    init_logging();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"arrow view: logger already initialized".into());
    }
}

/// Arrow widget exposed to JavaScript
#[wasm_bindgen]
pub struct ArrowView {
    controller: ArrowController<CanvasSurface>,
    /// Next-frame requests go here once the host registers a callback
    scheduler: Option<AnimationFrameScheduler>,
}

#[wasm_bindgen]
impl ArrowView {
    /// Create a view on `canvas` with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ArrowView, JsValue> {
        Ok(Self::build(canvas, ViewSettings::default())?)
    }

    /// Create a view with settings from a YAML string
    #[wasm_bindgen]
    pub fn with_settings_yaml(canvas: HtmlCanvasElement, yaml: &str) -> Result<ArrowView, JsValue> {
        let settings = ViewSettings::from_yaml(yaml)?;
        Ok(Self::build(canvas, settings)?)
    }

    fn build(canvas: HtmlCanvasElement, settings: ViewSettings) -> Result<ArrowView, ViewError> {
        let (width, height) = (canvas.width() as f32, canvas.height() as f32);
        let surface = CanvasSurface::new(canvas, settings.background.clone())?;

        let mut controller = ArrowController::new(surface, settings);
        controller.measure(MeasureMode::Exactly(width), MeasureMode::Exactly(height), None);

        Ok(Self {
            controller,
            scheduler: None,
        })
    }

    /// Replace settings from YAML, keeping the arrow where it is
    #[wasm_bindgen]
    pub fn load_settings(&mut self, yaml: &str) -> Result<(), JsValue> {
        let settings = ViewSettings::from_yaml(yaml)?;
        self.controller
            .surface_mut()
            .set_background(settings.background.clone());
        self.controller.apply_settings(settings);
        Ok(())
    }

    /// Use a loaded image as the arrow icon
    #[wasm_bindgen]
    pub fn set_icon(&mut self, icon: HtmlImageElement) {
        self.controller.surface_mut().set_icon(Some(icon));
    }

    /// Remove the icon; frames still animate but draw nothing
    #[wasm_bindgen]
    pub fn clear_icon(&mut self) {
        self.controller.surface_mut().set_icon(None);
    }

    /// Register the host's frame callback, passed to `requestAnimationFrame`
    #[wasm_bindgen]
    pub fn set_frame_callback(&mut self, callback: js_sys::Function) {
        self.scheduler = Some(AnimationFrameScheduler::new(callback));
    }

    /// Resize the canvas to an exact size and re-center the arrow
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.controller.surface_mut().resize(width, height);
        self.controller.measure(
            MeasureMode::Exactly(width as f32),
            MeasureMode::Exactly(height as f32),
            None,
        );
    }

    /// Measure against host constraints ("unspecified", "at_most", "exactly").
    ///
    /// A zero background size means "no background".
    #[wasm_bindgen]
    pub fn measure(
        &mut self,
        width_mode: &str,
        width: f32,
        height_mode: &str,
        height: f32,
        background_width: f32,
        background_height: f32,
    ) -> Result<(), JsValue> {
        let width_mode = MeasureMode::parse(width_mode, width)?;
        let height_mode = MeasureMode::parse(height_mode, height)?;
        let background = (background_width > 0.0 || background_height > 0.0)
            .then(|| Vec2::new(background_width, background_height));

        let size = self.controller.measure(width_mode, height_mode, background);
        self.controller
            .surface_mut()
            .resize(size.width.round() as u32, size.height.round() as u32);
        Ok(())
    }

    /// Handle a DOM pointer/mouse/touch event. Returns true if the arrow was retargeted.
    #[wasm_bindgen]
    pub fn on_pointer(&mut self, event_type: &str, x: f32, y: f32) -> Result<bool, JsValue> {
        let action = PointerAction::from_event_type(event_type);
        let scheduler = as_scheduler(&self.scheduler);
        let target = self.controller.on_pointer(action, Vec2::new(x, y), scheduler)?;
        Ok(target.is_some())
    }

    /// Advance and paint one frame. Returns true while the arrow is still moving.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<bool, JsValue> {
        if let Some(scheduler) = &self.scheduler {
            scheduler.frame_started();
        }
        let scheduler = as_scheduler(&self.scheduler);
        Ok(self.controller.render(scheduler)?)
    }

    #[wasm_bindgen(getter)]
    pub fn current_x(&self) -> f32 {
        self.controller.animator().current_position().x
    }

    #[wasm_bindgen(getter)]
    pub fn current_y(&self) -> f32 {
        self.controller.animator().current_position().y
    }

    #[wasm_bindgen(getter)]
    pub fn current_rotation(&self) -> f32 {
        self.controller.animator().current_rotation()
    }

    #[wasm_bindgen]
    pub fn is_converged(&self) -> bool {
        self.controller.animator().is_converged()
    }
}

fn as_scheduler(scheduler: &Option<AnimationFrameScheduler>) -> Option<&dyn FrameScheduler> {
    scheduler.as_ref().map(|s| s as &dyn FrameScheduler)
}
