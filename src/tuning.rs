//! Data-driven game balance
//!
//! Every physics and scoring constant the simulation reads comes from here, so a
//! host page can ship a JSON blob to retune the game without a rebuild.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How levels after the first are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Progression {
    /// Two hand-made stages; the second repeats forever
    #[default]
    Classic,
    /// Hand-made stages 1 and 2, then a seeded layout per level
    Generated { seed: u64 },
}

/// Physics, scoring and layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_force: f32,
    pub move_speed: f32,
    pub player_size: f32,
    pub coin_size: f32,
    pub coin_spin: f32,
    /// Vertical drift per tick at the peak of the bob (0 disables it)
    pub coin_bob_amplitude: f32,
    pub coin_bob_period_ms: f32,
    pub platform_height: f32,
    pub coin_score: u64,
    pub level_bonus: u64,
    pub design_width: f32,
    pub design_height: f32,
    pub progression: Progression,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            move_speed: MOVE_SPEED,
            player_size: PLAYER_SIZE,
            coin_size: COIN_SIZE,
            coin_spin: COIN_SPIN,
            coin_bob_amplitude: COIN_BOB_AMPLITUDE,
            coin_bob_period_ms: COIN_BOB_PERIOD_MS,
            platform_height: PLATFORM_HEIGHT,
            coin_score: COIN_SCORE,
            level_bonus: LEVEL_BONUS,
            design_width: DESIGN_WIDTH,
            design_height: DESIGN_HEIGHT,
            progression: Progression::Classic,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults and unusable
    /// values are replaced by them.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Replace values the simulation would divide by with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(self.coin_bob_period_ms) {
            log::warn!(
                "coin_bob_period_ms must be positive, got {}; using {}",
                self.coin_bob_period_ms,
                defaults.coin_bob_period_ms
            );
            self.coin_bob_period_ms = defaults.coin_bob_period_ms;
        }
        if !usable(self.design_width) || !usable(self.design_height) {
            log::warn!(
                "Design size must be positive, got {}x{}; using {}x{}",
                self.design_width,
                self.design_height,
                defaults.design_width,
                defaults.design_height
            );
            self.design_width = defaults.design_width;
            self.design_height = defaults.design_height;
        }
        self
    }

    /// Parse tuning, falling back to defaults if the blob is unusable
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Failed to parse tuning: {e}, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Design resolution as a vector
    pub fn design_size(&self) -> Vec2 {
        Vec2::new(self.design_width, self.design_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.jump_force, -15.0);
        assert_eq!(tuning.move_speed, 5.0);
        assert_eq!(tuning.coin_score, 10);
        assert_eq!(tuning.level_bonus, 50);
        assert_eq!(tuning.progression, Progression::Classic);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "coin_score": 25 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.coin_score, 25);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
        assert_eq!(tuning.design_size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_generated_progression_json() {
        let tuning =
            Tuning::from_json(r#"{ "progression": { "mode": "generated", "seed": 7 } }"#).unwrap();
        assert_eq!(tuning.progression, Progression::Generated { seed: 7 });
    }

    #[test]
    fn test_zero_bob_period_uses_default() {
        let tuning = Tuning::load_or_default(Some(r#"{ "coin_bob_period_ms": 0 }"#));
        assert_eq!(tuning.coin_bob_period_ms, COIN_BOB_PERIOD_MS);

        // Coins stay finite and collectible
        use crate::sim::{Coin, Movable};
        let mut coin = Coin::new(Vec2::new(100.0, 100.0), &tuning);
        for t in 0..10 {
            coin.update(t as f32 * 16.0);
        }
        assert!(coin.body.pos.is_finite());
    }

    #[test]
    fn test_degenerate_design_size_uses_default() {
        let tuning = Tuning::from_json(r#"{ "design_width": 0, "design_height": -5 }"#).unwrap();
        assert_eq!(tuning.design_size(), Vec2::new(DESIGN_WIDTH, DESIGN_HEIGHT));
    }

    #[test]
    fn test_bad_json_falls_back() {
        let tuning = Tuning::load_or_default(Some("{ not json"));
        assert_eq!(tuning, Tuning::default());
        assert_eq!(Tuning::load_or_default(None), Tuning::default());
    }
}
