use crate::core::{Hsla, Surface};
use glam::Vec2;
use web_sys as web;

/// `Surface` backed by a 2D canvas context already scaled to CSS pixels.
pub struct CanvasSurface {
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }
}
