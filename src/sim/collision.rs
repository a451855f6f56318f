//! Axis-aligned collision tests and landing resolution
//!
//! Screen space: +x right, +y down. A rectangle's `top` is its smallest y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Closed AABB overlap: boxes that only touch along an edge still intersect
#[inline]
pub fn aabb_intersects(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.left() || a.left() > b.right() || a.bottom() < b.top() || a.top() > b.bottom())
}

/// Whether `body` straddles the top edge of `surface` while overlapping it.
///
/// This is the only landing test: there is no velocity check and no sweep, so a
/// body moving fast enough can pass a thin surface between two ticks.
pub fn straddles_top(body: &Rect, surface: &Rect) -> bool {
    aabb_intersects(body, surface) && body.bottom() > surface.top() && body.top() < surface.top()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(340.0, 350.0, 40.0, 40.0);
        let b = Rect::new(350.0, 350.0, 20.0, 20.0);
        assert!(aabb_intersects(&a, &b));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(aabb_intersects(&a, &right));
        assert!(aabb_intersects(&a, &below));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!aabb_intersects(&a, &Rect::new(10.5, 0.0, 10.0, 10.0)));
        assert!(!aabb_intersects(&a, &Rect::new(0.0, -10.5, 10.0, 10.0)));
    }

    #[test]
    fn test_straddles_top() {
        let platform = Rect::new(300.0, 400.0, 200.0, 20.0);
        // Feet 5 units into the platform
        assert!(straddles_top(&Rect::new(350.0, 365.0, 40.0, 40.0), &platform));
        // Resting exactly on top: bottom == top is not "below"
        assert!(!straddles_top(&Rect::new(350.0, 360.0, 40.0, 40.0), &platform));
        // Fully inside the platform band from below
        assert!(!straddles_top(&Rect::new(350.0, 405.0, 40.0, 10.0), &platform));
        // Horizontally clear
        assert!(!straddles_top(&Rect::new(600.0, 365.0, 40.0, 40.0), &platform));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rect() -> impl Strategy<Value = Rect> {
            (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn intersection_is_symmetric(a in rect(), b in rect()) {
                prop_assert_eq!(aabb_intersects(&a, &b), aabb_intersects(&b, &a));
            }

            #[test]
            fn rect_intersects_itself(a in rect()) {
                prop_assert!(aabb_intersects(&a, &a));
            }
        }
    }
}
