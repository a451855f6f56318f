//! Canvas 2D backend for the browser
//!
//! Draw errors from the browser are logged and skipped; a bad frame never stops
//! the game loop.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::surface::{Paint, Surface};
use crate::sim::Rect;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Images requested so far, keyed by source URL
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn set_fill(&self, paint: &Paint) -> Result<(), JsValue> {
        match *paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(color),
            Paint::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                gradient.add_color_stop(0.0, stops[0])?;
                gradient.add_color_stop(1.0, stops[1])?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let gradient = self.ctx.create_radial_gradient(
                    center.x as f64,
                    center.y as f64,
                    0.0,
                    center.x as f64,
                    center.y as f64,
                    radius as f64,
                )?;
                gradient.add_color_stop(0.0, stops[0])?;
                gradient.add_color_stop(1.0, stops[1])?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    /// Rounded rectangle path via `arcTo`, which every canvas supports
    fn trace_round_rect(&self, rect: Rect, radius: f32) -> Result<(), JsValue> {
        let (x, y) = (rect.left() as f64, rect.top() as f64);
        let (r, b) = (rect.right() as f64, rect.bottom() as f64);
        let radius = (radius.min(rect.size.x / 2.0).min(rect.size.y / 2.0)).max(0.0) as f64;

        self.ctx.begin_path();
        self.ctx.move_to(x + radius, y);
        self.ctx.arc_to(r, y, r, b, radius)?;
        self.ctx.arc_to(r, b, x, b, radius)?;
        self.ctx.arc_to(x, b, x, y, radius)?;
        self.ctx.arc_to(x, y, r, y, radius)?;
        self.ctx.close_path();
        Ok(())
    }

    fn try_round_rect(&self, rect: Rect, radius: f32, paint: &Paint) -> Result<(), JsValue> {
        self.set_fill(paint)?;
        self.trace_round_rect(rect, radius)?;
        self.ctx.fill();
        Ok(())
    }

    fn try_circle(&self, center: Vec2, radius: f32, paint: &Paint) -> Result<(), JsValue> {
        self.set_fill(paint)?;
        self.ctx.begin_path();
        self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }

    fn try_image(&mut self, src: &str, rect: Rect) -> Result<bool, JsValue> {
        if !self.images.contains_key(src) {
            let image = HtmlImageElement::new()?;
            image.set_src(src);
            log::info!("Loading image {src}");
            self.images.insert(src.to_string(), image);
        }
        let Some(image) = self.images.get(src) else {
            return Ok(false);
        };
        // A broken image reports complete with zero natural width
        if !image.complete() || image.natural_width() == 0 {
            return Ok(false);
        }
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                rect.left() as f64,
                rect.top() as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            )?;
        Ok(true)
    }
}

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Canvas {what} failed: {:?}", e);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        let result = self.set_fill(paint).map(|_| {
            self.ctx.fill_rect(
                rect.left() as f64,
                rect.top() as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            )
        });
        report("fill_rect", result);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        report("round_rect", self.try_round_rect(rect, radius, paint));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        report("circle", self.try_circle(center, radius, paint));
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: &'static str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        let result = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start as f64,
            end as f64,
        );
        if result.is_ok() {
            self.ctx.stroke();
        }
        report("arc", result);
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let result = self.set_fill(paint);
        if result.is_ok() {
            self.ctx.begin_path();
            self.ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
            self.ctx.close_path();
            self.ctx.fill();
        }
        report("polygon", result);
    }

    fn draw_image(&mut self, src: &str, rect: Rect) -> bool {
        match self.try_image(src, rect) {
            Ok(drawn) => drawn,
            Err(e) => {
                log::warn!("Canvas image {src} failed: {:?}", e);
                false
            }
        }
    }
}
