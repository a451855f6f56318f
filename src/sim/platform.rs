//! Static platforms

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, Entity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub body: Entity,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Entity::new(Vec2::new(x, y), Vec2::new(width, height)),
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.body.pos.y
    }
}

impl Collidable for Platform {
    fn body(&self) -> &Entity {
        &self.body
    }
}
