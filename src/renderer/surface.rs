//! The drawing surface the scene paints onto
//!
//! Mirrors the handful of Canvas 2D operations the game needs. Backends: the
//! browser canvas (`canvas2d`) and a recording list for headless use and tests.

use glam::Vec2;

use crate::sim::Rect;

/// How a shape is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(&'static str),
    /// Two-stop linear gradient between two points
    Linear {
        from: Vec2,
        to: Vec2,
        stops: [&'static str; 2],
    },
    /// Two-stop radial gradient from `center` out to `radius`
    Radial {
        center: Vec2,
        radius: f32,
        stops: [&'static str; 2],
    },
}

pub trait Surface {
    /// Size in device pixels
    fn size(&self) -> Vec2;

    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Stroke an arc from `start` to `end` (radians, clockwise in screen space)
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: &'static str);

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);

    /// Blit an image into `rect`. Returns false if it isn't ready, so the
    /// caller can draw a fallback.
    fn draw_image(&mut self, src: &str, rect: Rect) -> bool;
}
