//! Coin Hop - A tiny browser platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level progression)
//! - `renderer`: Draw surface abstraction and scene painting
//! - `platform`: Browser glue (input translation, canvas sizing)
//! - `tuning`: Data-driven game balance
//! - `characters`: Selectable player characters

pub mod characters;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use characters::{Character, Roster};
pub use settings::{QualityPreset, Settings};
pub use tuning::{Progression, Tuning};

/// Game configuration constants
pub mod consts {
    /// Design resolution every layout is authored against
    pub const DESIGN_WIDTH: f32 = 800.0;
    pub const DESIGN_HEIGHT: f32 = 600.0;

    /// Nominal display refresh used when the host can't report a frame delta
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Player defaults (units per tick)
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const JUMP_FORCE: f32 = -15.0;
    pub const GRAVITY: f32 = 0.8;
    pub const MOVE_SPEED: f32 = 5.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_SPIN: f32 = 0.1; // radians per tick
    pub const COIN_BOB_AMPLITUDE: f32 = 0.5;
    pub const COIN_BOB_PERIOD_MS: f32 = 500.0;

    /// Platforms are always this tall, whatever the canvas scale
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Scoring
    pub const COIN_SCORE: u64 = 10;
    pub const LEVEL_BONUS: u64 = 50;
}
