use backdrop_core::{Painter, Rgb};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas implementation of the core `Painter` seam.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        Ok(Self { ctx })
    }

    pub fn clear(&self, width: u32, height: u32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }
}

fn rgba(color: Rgb, alpha: f32) -> String {
    format!("rgba({},{},{},{:.3})", color.r, color.g, color.b, alpha)
}

impl Painter for CanvasPainter {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&rgba(color, alpha));
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&rgba(color, alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
