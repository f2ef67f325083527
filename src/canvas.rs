use crate::core::{Color, RenderSurface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `RenderSurface` backed by a canvas 2D context. Width and height are read
/// live from the canvas, so resizes take effect on the next frame.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl RenderSurface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: f32, alpha: f32) {
        let css = color.to_css();
        self.ctx.save();
        self.ctx.set_shadow_blur(glow as f64);
        self.ctx.set_shadow_color(&css);
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("[canvas] arc error: {:?}", e);
        }
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, alpha: f32, width: f32) {
        let style = format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha);
        self.ctx.save();
        self.ctx.set_stroke_style_str(&style);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.ctx.restore();
    }
}
