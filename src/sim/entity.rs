//! Shared movable rectangle and the capabilities built on it

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, aabb_intersects};

/// A simulated rectangle with position, fixed size and velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    size: Vec2,
    pub vel: Vec2,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Size is fixed at construction (canvas rescale goes through `rescale`)
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Euler step: one tick of velocity, no delta-time scaling
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn intersects(&self, other: &Entity) -> bool {
        aabb_intersects(&self.bounds(), &other.bounds())
    }

    /// Scale position and size independently for a canvas resize
    pub fn rescale(&mut self, pos_scale: Vec2, size_scale: Vec2) {
        self.pos *= pos_scale;
        self.size *= size_scale;
    }
}

/// Something that advances once per tick
pub trait Movable {
    fn update(&mut self, time_ms: f32);
}

/// Something with a collision box
pub trait Collidable {
    fn body(&self) -> &Entity;

    fn bounds(&self) -> Rect {
        self.body().bounds()
    }

    fn intersects<C: Collidable + ?Sized>(&self, other: &C) -> bool {
        self.body().intersects(other.body())
    }
}

impl Collidable for Entity {
    fn body(&self) -> &Entity {
        self
    }
}

impl Movable for Entity {
    fn update(&mut self, _time_ms: f32) {
        self.integrate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut e = Entity::new(Vec2::new(10.0, 20.0), Vec2::splat(5.0));
        e.vel = Vec2::new(2.0, -3.0);
        e.integrate();
        assert_eq!(e.pos, Vec2::new(12.0, 17.0));
        assert_eq!(e.size(), Vec2::splat(5.0));
    }

    #[test]
    fn test_rescale() {
        let mut e = Entity::new(Vec2::new(100.0, 100.0), Vec2::new(20.0, 10.0));
        e.rescale(Vec2::new(0.5, 2.0), Vec2::new(0.5, 1.0));
        assert_eq!(e.pos, Vec2::new(50.0, 200.0));
        assert_eq!(e.size(), Vec2::new(10.0, 10.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn constant_velocity_is_linear(
                x in -1000i32..1000,
                v in -20i32..20,
                n in 0u32..200,
            ) {
                // Integer-valued floats keep the sum exact
                let mut e = Entity::new(Vec2::new(x as f32, 0.0), Vec2::ONE);
                e.vel = Vec2::new(v as f32, 0.0);
                for _ in 0..n {
                    e.update(0.0);
                }
                prop_assert_eq!(e.pos.x, x as f32 + n as f32 * v as f32);
                prop_assert_eq!(e.pos.y, 0.0);
            }

            #[test]
            fn intersects_is_symmetric(
                ax in -100.0f32..100.0, ay in -100.0f32..100.0,
                bx in -100.0f32..100.0, by in -100.0f32..100.0,
                aw in 0.0f32..50.0, bw in 0.0f32..50.0,
            ) {
                let a = Entity::new(Vec2::new(ax, ay), Vec2::splat(aw));
                let b = Entity::new(Vec2::new(bx, by), Vec2::splat(bw));
                prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            }
        }
    }
}
