use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use crate::error::ViewError;
use crate::math::Vec2;
use super::frame::IconSurface;
use super::transform::IconTransform;

/// Wrapper around a canvas 2D context that draws the arrow icon
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    icon: Option<HtmlImageElement>,
    background: Option<String>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, background: Option<String>) -> Result<Self, ViewError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ViewError::js("getContext", e))?
            .ok_or(ViewError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ViewError::ContextUnavailable)?;

        Ok(Self {
            canvas,
            ctx,
            icon: None,
            background,
        })
    }

    pub fn set_icon(&mut self, icon: Option<HtmlImageElement>) {
        self.icon = icon;
    }

    pub fn set_background(&mut self, background: Option<String>) {
        self.background = background;
    }

    /// Resize the backing store (clears the canvas)
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Backing store size in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn draw_transformed(&self, icon: &HtmlImageElement, t: &IconTransform) -> Result<(), ViewError> {
        let ctx = &self.ctx;
        let js = |e| ViewError::js("canvas transform", e);

        ctx.translate(t.translate.x as f64, t.translate.y as f64).map_err(js)?;
        ctx.translate(t.pivot.x as f64, t.pivot.y as f64).map_err(js)?;
        ctx.rotate(t.rotation_radians() as f64).map_err(js)?;
        ctx.translate(-t.pivot.x as f64, -t.pivot.y as f64).map_err(js)?;

        ctx.draw_image_with_html_image_element(icon, 0.0, 0.0)
            .map_err(|e| ViewError::js("drawImage", e))
    }
}

impl IconSurface for CanvasSurface {
    fn icon_size(&self) -> Option<Vec2> {
        // An image that hasn't decoded yet reports 0x0
        self.icon
            .as_ref()
            .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
            .filter(|size| size.x > 0.0 && size.y > 0.0)
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        let size = self.size();
        match &self.background {
            Some(color) => {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            None => self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64),
        }
        Ok(())
    }

    fn draw_icon(&mut self, transform: &IconTransform) -> Result<(), ViewError> {
        let Some(icon) = &self.icon else {
            return Ok(());
        };

        self.ctx.save();
        let result = self.draw_transformed(icon, transform);
        self.ctx.restore();
        result
    }
}
