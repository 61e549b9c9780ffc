// Surface implementation backed by a <canvas> 2d context. When the canvas
// has no 2d context every drawing call silently does nothing.

use crate::color::Color;
use crate::config::GlowStop;
use crate::surface::Surface;
use std::f64::consts::TAU;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context.dyn_into::<CanvasRenderingContext2d>().ok(),
            _ => None,
        };
        if context.is_none() {
            error!("particle field: canvas has no 2d context, nothing will be drawn");
        }
        CanvasSurface { canvas, context }
    }

    pub fn is_available(&self) -> bool {
        self.context.is_some()
    }
}

impl Surface for CanvasSurface {
    // Keeps the backing store the same size as the canvas's CSS box
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self, width: f64, height: f64) {
        if let Some(ctx) = &self.context {
            ctx.clear_rect(0.0, 0.0, width, height);
        }
    }

    fn glow(&mut self, center: Vector2<f64>, radius: f64, stops: &[GlowStop]) {
        let ctx = match &self.context {
            Some(ctx) => ctx,
            None => return,
        };
        let [x, y] = center;
        let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, radius) {
            Ok(gradient) => gradient,
            Err(_) => return,
        };
        for stop in stops {
            if gradient
                .add_color_stop(stop.offset as f32, &stop.color.to_css())
                .is_err()
            {
                return;
            }
        }

        ctx.save();
        if ctx.set_global_composite_operation("screen").is_ok() {
            ctx.set_fill_style(&gradient);
            ctx.begin_path();
            if ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
                ctx.fill();
            }
        }
        ctx.restore();
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        if let Some(ctx) = &self.context {
            ctx.begin_path();
            if ctx.arc(center[0], center[1], radius, 0.0, TAU).is_ok() {
                ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
                ctx.fill();
            }
        }
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color) {
        if let Some(ctx) = &self.context {
            ctx.begin_path();
            ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
            ctx.set_line_width(width);
            ctx.move_to(from[0], from[1]);
            ctx.line_to(to[0], to[1]);
            ctx.stroke();
        }
    }
}
