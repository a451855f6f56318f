//! Collectible coins

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, Entity, Movable};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub body: Entity,
    pub collected: bool,
    /// Spin angle for rendering (radians)
    pub rotation: f32,
    spin: f32,
    bob_amplitude: f32,
    bob_period_ms: f32,
}

impl Coin {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Entity::new(pos, Vec2::splat(tuning.coin_size)),
            collected: false,
            rotation: 0.0,
            spin: tuning.coin_spin,
            bob_amplitude: tuning.coin_bob_amplitude,
            bob_period_ms: tuning.coin_bob_period_ms,
        }
    }

    /// Mark collected. Returns true only on the first pickup.
    pub fn collect(&mut self) -> bool {
        let fresh = !self.collected;
        self.collected = true;
        fresh
    }
}

impl Movable for Coin {
    /// The bob writes straight into `pos`, so it does move the hit box.
    fn update(&mut self, time_ms: f32) {
        self.body.integrate();
        self.rotation += self.spin;
        self.body.pos.y += (time_ms / self.bob_period_ms).sin() * self.bob_amplitude;
    }
}

impl Collidable for Coin {
    fn body(&self) -> &Entity {
        &self.body
    }
}
