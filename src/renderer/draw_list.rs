//! Recording surface
//!
//! Captures draw calls instead of rasterizing them. Used by the native build and
//! by tests to check what the scene painted and in which order.

use std::collections::HashSet;

use glam::Vec2;

use super::surface::{Paint, Surface};
use crate::sim::Rect;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect { rect: Rect, paint: Paint },
    RoundRect { rect: Rect, radius: f32, paint: Paint },
    Circle { center: Vec2, radius: f32, paint: Paint },
    Arc { center: Vec2, radius: f32, start: f32, end: f32, color: &'static str },
    Polygon { points: Vec<Vec2>, paint: Paint },
    Image { src: String, rect: Rect },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    size: Vec2,
    /// Image sources that count as loaded
    loaded: HashSet<String>,
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Treat `src` as loaded from now on
    pub fn mark_loaded(&mut self, src: impl Into<String>) {
        self.loaded.insert(src.into());
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCmd::Rect { rect, paint: *paint });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::RoundRect {
            rect,
            radius,
            paint: *paint,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: &'static str) {
        self.commands.push(DrawCmd::Arc {
            center,
            radius,
            start,
            end,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        self.commands.push(DrawCmd::Polygon {
            points: points.to_vec(),
            paint: *paint,
        });
    }

    fn draw_image(&mut self, src: &str, rect: Rect) -> bool {
        if !self.loaded.contains(src) {
            return false;
        }
        self.commands.push(DrawCmd::Image {
            src: src.to_string(),
            rect,
        });
        true
    }
}
