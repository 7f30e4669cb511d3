//! HTML canvas 2D surface (WASM only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Surface, css_color};
use crate::sim::Rect;

/// Draws through a canvas element's 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wrap the 2D context of `canvas`, if the browser provides one
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn log_err(what: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::warn!("Canvas {} failed: {:?}", what, e);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        Self::log_err(
            "arc",
            self.ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU),
        );
        self.ctx.fill();
    }

    fn dashed_vline(&mut self, x: f32, top: f32, bottom: f32, dash: (f32, f32), color: Color) {
        self.ctx.set_stroke_style_str(&css_color(color));
        let pattern = js_sys::Array::of2(&JsValue::from(dash.0), &JsValue::from(dash.1));
        Self::log_err("set_line_dash", self.ctx.set_line_dash(&pattern));
        self.ctx.begin_path();
        self.ctx.move_to(x as f64, top as f64);
        self.ctx.line_to(x as f64, bottom as f64);
        self.ctx.stroke();
        Self::log_err("set_line_dash", self.ctx.set_line_dash(&js_sys::Array::new()));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.set_font(&format!("{}px Arial", size_px));
        Self::log_err(
            "fill_text",
            self.ctx.fill_text(text, pos.x as f64, pos.y as f64),
        );
    }
}
