//! Game state and level transitions
//!
//! The whole game lives in one explicitly constructed `GameState`; the browser
//! harness owns it and nothing else holds a reference between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::level::layout_for_level;
use super::platform::Platform;
use super::player::{Command, Player};
use crate::characters::Character;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start / character selection screen; ticks do nothing
    Title,
    /// Active gameplay
    Playing,
}

/// Things that happened during the last tick, for the HUD and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { index: usize },
    ScoreChanged { score: u64 },
    FellOff,
    LevelAdvanced { level: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Canvas size in device pixels
    pub canvas: Vec2,
    /// 1-based level number
    pub level: u32,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cosmetic clock, advanced by the host's frame delta
    pub time_ms: f32,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A game sitting on the title screen with an idle default player
    pub fn new(canvas: Vec2, tuning: Tuning) -> Self {
        let player = Player::new(canvas / 2.0, Character::default(), &tuning);
        Self {
            tuning,
            phase: GamePhase::Title,
            canvas,
            level: 1,
            player,
            platforms: Vec::new(),
            coins: Vec::new(),
            time_ticks: 0,
            time_ms: 0.0,
            events: Vec::new(),
        }
    }

    /// Create the player with `character` and install level 1
    pub fn start(&mut self, character: Character) {
        log::info!("Starting game as '{}'", character.name);
        self.player = Player::new(self.spawn_point(), character, &self.tuning);
        self.level = 1;
        self.install_level();
        self.phase = GamePhase::Playing;
        self.events.clear();
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Canvas / design ratio used to place layouts
    pub fn scale(&self) -> Vec2 {
        self.canvas / self.tuning.design_size()
    }

    /// Where the player (re)appears: its top-left at the canvas midpoint
    pub fn spawn_point(&self) -> Vec2 {
        self.canvas / 2.0
    }

    pub fn move_left(&mut self) {
        self.player.move_left();
    }

    pub fn move_right(&mut self) {
        self.player.move_right();
    }

    pub fn stop(&mut self) {
        self.player.stop();
    }

    pub fn jump(&mut self) {
        self.player.jump();
    }

    pub fn apply(&mut self, command: Command) {
        self.player.apply(command);
    }

    /// Level is complete once a non-empty coin set is fully collected
    pub fn level_complete(&self) -> bool {
        !self.coins.is_empty() && self.coins.iter().all(|c| c.collected)
    }

    pub(crate) fn award(&mut self, points: u64) {
        self.player.score += points;
        self.events.push(GameEvent::ScoreChanged {
            score: self.player.score,
        });
    }

    /// Punitive reset after falling off the bottom of the canvas
    pub fn fall_reset(&mut self) {
        log::info!(
            "Player fell on level {} with score {}, restarting",
            self.level,
            self.player.score
        );
        let spawn = self.spawn_point();
        self.player.respawn(spawn);
        for coin in &mut self.coins {
            coin.collected = false;
        }
        self.player.score = 0;
        self.events.push(GameEvent::FellOff);
        self.events.push(GameEvent::ScoreChanged { score: 0 });
    }

    /// Bonus, recentre, and install the next layout
    pub fn advance_level(&mut self) {
        log::info!("All coins collected on level {}, advancing", self.level);
        self.award(self.tuning.level_bonus);
        let spawn = self.spawn_point();
        self.player.respawn(spawn);
        self.level += 1;
        self.install_level();
        self.events.push(GameEvent::LevelAdvanced { level: self.level });
    }

    fn install_level(&mut self) {
        let layout = layout_for_level(self.level, &self.tuning);
        let (platforms, coins) = layout.build(self.scale(), &self.tuning);
        self.platforms = platforms;
        self.coins = coins;
    }

    /// Rescale every entity for a new canvas size
    pub fn resize(&mut self, canvas: Vec2) {
        if canvas.x <= 0.0 || canvas.y <= 0.0 || canvas == self.canvas {
            return;
        }
        let ratio = canvas / self.canvas;
        log::info!(
            "Canvas resized {}x{} -> {}x{}",
            self.canvas.x,
            self.canvas.y,
            canvas.x,
            canvas.y
        );
        self.canvas = canvas;
        // Same rules as `Layout::build`: platforms keep their height, coins and
        // the player keep their size
        self.player.body.pos *= ratio;
        for platform in &mut self.platforms {
            platform.body.rescale(ratio, Vec2::new(ratio.x, 1.0));
        }
        for coin in &mut self.coins {
            coin.body.rescale(ratio, Vec2::ONE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameState {
        let mut state = GameState::new(Vec2::new(800.0, 600.0), Tuning::default());
        state.start(Character::default());
        state
    }

    #[test]
    fn test_new_is_on_title() {
        let state = GameState::new(Vec2::new(800.0, 600.0), Tuning::default());
        assert_eq!(state.phase, GamePhase::Title);
        assert!(state.coins.is_empty());
        assert!(!state.level_complete());
    }

    #[test]
    fn test_start_installs_level_one() {
        let state = started();
        assert!(state.is_started());
        assert_eq!(state.player.body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.platforms.len(), 3);
        assert_eq!(state.coins.len(), 3);
    }

    #[test]
    fn test_fall_reset() {
        let mut state = started();
        state.player.score = 120;
        state.player.jump();
        state.player.move_right();
        state.coins[0].collected = true;
        state.fall_reset();
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.body.vel, Vec2::ZERO);
        assert!(!state.player.is_jumping);
        assert!(state.coins.iter().all(|c| !c.collected));
        assert!(state.events.contains(&GameEvent::FellOff));
    }

    #[test]
    fn test_advance_keeps_score() {
        let mut state = started();
        state.player.score = 30;
        state.advance_level();
        assert_eq!(state.player.score, 80);
        assert_eq!(state.level, 2);
        assert_eq!(state.coins.len(), 5);
        assert!(state.coins.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_resize_scales_layout() {
        let mut state = started();
        state.resize(Vec2::new(400.0, 300.0));
        assert_eq!(state.player.body.pos, Vec2::new(200.0, 150.0));
        assert_eq!(state.player.body.size(), Vec2::splat(40.0));
        assert_eq!(state.platforms[0].body.pos, Vec2::new(150.0, 200.0));
        assert_eq!(state.platforms[0].body.size(), Vec2::new(100.0, 20.0));
        assert_eq!(state.coins[0].body.pos, Vec2::new(175.0, 175.0));
        assert_eq!(state.coins[0].body.size(), Vec2::splat(20.0));
        // Degenerate sizes are ignored
        state.resize(Vec2::ZERO);
        assert_eq!(state.canvas, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_resize_matches_next_level_geometry() {
        let mut state = started();
        state.resize(Vec2::new(400.0, 300.0));
        let coin_before = state.coins[0].body.size();
        let height_before = state.platforms[0].body.size().y;

        state.advance_level();

        assert_eq!(state.coins[0].body.size(), coin_before);
        assert_eq!(state.platforms[0].body.size().y, height_before);
        // Level 2's first platform (200, 450, 250) at half scale
        assert_eq!(state.platforms[0].body.pos, Vec2::new(100.0, 225.0));
        assert_eq!(state.platforms[0].body.size(), Vec2::new(125.0, 20.0));
    }
}
