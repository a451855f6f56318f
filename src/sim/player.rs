//! The player sprite
//!
//! Vertical motion is a two-state machine: grounded until `jump()`, airborne until
//! the controller lands the player on a platform. There is no air jump.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Collidable, Entity, Movable};
use crate::characters::Character;
use crate::tuning::Tuning;

/// Movement commands delivered by the input layer between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Stop,
    Jump,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Entity,
    /// Left the ground and hasn't landed yet
    pub is_jumping: bool,
    pub score: u64,
    jump_force: f32,
    gravity: f32,
    speed: f32,
    /// Cosmetic only
    pub character: Character,
}

impl Player {
    pub fn new(pos: Vec2, character: Character, tuning: &Tuning) -> Self {
        Self {
            body: Entity::new(pos, Vec2::splat(tuning.player_size)),
            is_jumping: false,
            score: 0,
            jump_force: tuning.jump_force,
            gravity: tuning.gravity,
            speed: tuning.move_speed,
            character,
        }
    }

    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.body.vel.y = self.jump_force;
            self.is_jumping = true;
        }
    }

    pub fn move_left(&mut self) {
        self.body.vel.x = -self.speed;
    }

    pub fn move_right(&mut self) {
        self.body.vel.x = self.speed;
    }

    pub fn stop(&mut self) {
        self.body.vel.x = 0.0;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Stop => self.stop(),
            Command::Jump => self.jump(),
        }
    }

    /// Put the player back at `pos` with no motion and feet "on the ground"
    pub fn respawn(&mut self, pos: Vec2) {
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
        self.is_jumping = false;
    }

    /// Land on a surface whose top edge is at `top`
    pub fn land_at(&mut self, top: f32) {
        self.body.pos.y = top - self.body.size().y;
        self.body.vel.y = 0.0;
        self.is_jumping = false;
    }

    /// Render-only vertical bob while airborne
    pub fn jump_effect(&self, time_ms: f32) -> f32 {
        if self.is_jumping {
            (time_ms / 100.0).sin() * 5.0
        } else {
            0.0
        }
    }

    /// Render-only wobble while walking
    pub fn move_effect(&self, time_ms: f32) -> f32 {
        if self.body.vel.x.abs() > 0.0 {
            (time_ms / 150.0).sin() * 3.0
        } else {
            0.0
        }
    }
}

impl Movable for Player {
    fn update(&mut self, _time_ms: f32) {
        self.body.vel.y += self.gravity;
        self.body.integrate();
    }
}

impl Collidable for Player {
    fn body(&self) -> &Entity {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), Character::default(), &Tuning::default())
    }

    #[test]
    fn test_gravity_only_ten_ticks() {
        let mut player = player_at(400.0, 300.0);
        let mut last_y = player.body.pos.y;
        for _ in 0..10 {
            player.update(0.0);
            assert!(player.body.pos.y > last_y);
            last_y = player.body.pos.y;
        }
        assert!((player.body.vel.y - 8.0).abs() < 0.001);
        // 0.8 * (1 + 2 + ... + 10)
        assert!((player.body.pos.y - 344.0).abs() < 0.01);
    }

    #[test]
    fn test_double_jump_is_noop() {
        let mut player = player_at(0.0, 0.0);
        player.jump();
        assert_eq!(player.body.vel.y, -15.0);
        assert!(player.is_jumping);

        player.update(0.0);
        let vy = player.body.vel.y;
        player.jump();
        assert_eq!(player.body.vel.y, vy);
    }

    #[test]
    fn test_move_commands_overwrite() {
        let mut player = player_at(0.0, 0.0);
        player.apply(Command::MoveRight);
        player.apply(Command::MoveRight);
        assert_eq!(player.body.vel.x, 5.0);
        player.apply(Command::MoveLeft);
        assert_eq!(player.body.vel.x, -5.0);
        player.apply(Command::Stop);
        assert_eq!(player.body.vel.x, 0.0);
    }

    #[test]
    fn test_land_at_resets_jump() {
        let mut player = player_at(0.0, 0.0);
        player.jump();
        player.land_at(400.0);
        assert_eq!(player.body.pos.y, 360.0);
        assert_eq!(player.body.vel.y, 0.0);
        assert!(!player.is_jumping);
        player.jump();
        assert!(player.is_jumping);
    }

    #[test]
    fn test_effects_are_cosmetic() {
        let mut player = player_at(100.0, 100.0);
        assert_eq!(player.jump_effect(1234.0), 0.0);
        assert_eq!(player.move_effect(1234.0), 0.0);

        player.jump();
        player.move_right();
        let before = player.body.clone();
        let _ = player.jump_effect(250.0);
        let _ = player.move_effect(250.0);
        assert_eq!(player.body, before);
        assert!(player.jump_effect(250.0).abs() <= 5.0);
        assert!(player.move_effect(250.0).abs() <= 3.0);
    }
}
