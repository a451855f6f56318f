//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time physics
//! - Seeded RNG only (generated levels)
//! - Stable iteration order (layout order)
//! - No rendering or platform dependencies

pub mod coin;
pub mod collision;
pub mod entity;
pub mod level;
pub mod platform;
pub mod player;
pub mod state;
pub mod tick;

pub use coin::Coin;
pub use collision::{Rect, aabb_intersects, straddles_top};
pub use entity::{Collidable, Entity, Movable};
pub use level::{Layout, PlatformSlot, generate_layout, layout_for_level};
pub use platform::Platform;
pub use player::{Command, Player};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
