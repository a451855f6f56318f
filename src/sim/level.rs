//! Level layouts
//!
//! Layouts are authored in design units (800×600 by default) and scaled to the
//! live canvas when installed. Levels 1 and 2 are hand-made; under
//! `Progression::Generated` every later level is laid out from a seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::platform::Platform;
use crate::tuning::{Progression, Tuning};

/// A platform before scaling: top-left corner and width (height is fixed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSlot {
    pub pos: Vec2,
    pub width: f32,
}

impl PlatformSlot {
    pub const fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
        }
    }
}

/// Platforms and coins for one level, in design units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub platforms: Vec<PlatformSlot>,
    pub coins: Vec<Vec2>,
}

const LEVEL_ONE_PLATFORMS: [PlatformSlot; 3] = [
    PlatformSlot::new(300.0, 400.0, 200.0),
    PlatformSlot::new(100.0, 300.0, 200.0),
    PlatformSlot::new(500.0, 200.0, 200.0),
];

const LEVEL_ONE_COINS: [Vec2; 3] = [
    Vec2::new(350.0, 350.0),
    Vec2::new(150.0, 250.0),
    Vec2::new(550.0, 150.0),
];

const LEVEL_TWO_PLATFORMS: [PlatformSlot; 5] = [
    PlatformSlot::new(200.0, 450.0, 250.0),
    PlatformSlot::new(50.0, 350.0, 150.0),
    PlatformSlot::new(400.0, 250.0, 200.0),
    PlatformSlot::new(600.0, 350.0, 150.0),
    PlatformSlot::new(300.0, 150.0, 150.0),
];

const LEVEL_TWO_COINS: [Vec2; 5] = [
    Vec2::new(250.0, 400.0),
    Vec2::new(100.0, 300.0),
    Vec2::new(450.0, 200.0),
    Vec2::new(650.0, 300.0),
    Vec2::new(350.0, 100.0),
];

/// Coins hover this far right of / above their platform's corner
const COIN_OFFSET: Vec2 = Vec2::new(50.0, -50.0);
/// Generated platform rows, bottom to top (design units)
const GENERATED_ROWS: [f32; 4] = [450.0, 350.0, 250.0, 150.0];
const GENERATED_MIN_WIDTH: f32 = 120.0;
const GENERATED_MAX_WIDTH: f32 = 250.0;
const GENERATED_MAX_PLATFORMS: usize = 9;

/// Layout for a 1-based level number
pub fn layout_for_level(level: u32, tuning: &Tuning) -> Layout {
    match (level, tuning.progression) {
        (0 | 1, _) => Layout {
            platforms: LEVEL_ONE_PLATFORMS.to_vec(),
            coins: LEVEL_ONE_COINS.to_vec(),
        },
        (2, _) | (_, Progression::Classic) => Layout {
            platforms: LEVEL_TWO_PLATFORMS.to_vec(),
            coins: LEVEL_TWO_COINS.to_vec(),
        },
        (_, Progression::Generated { seed }) => generate_layout(level, seed, tuning.design_size()),
    }
}

/// Seeded layout for levels 3+: one more platform per level, one coin per platform
pub fn generate_layout(level: u32, seed: u64, design: Vec2) -> Layout {
    let level_seed = seed ^ u64::from(level).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = Pcg32::seed_from_u64(level_seed);

    let count = (5 + level.saturating_sub(2) as usize).min(GENERATED_MAX_PLATFORMS);
    let mut platforms = Vec::with_capacity(count);

    for i in 0..count {
        let y = GENERATED_ROWS[i % GENERATED_ROWS.len()];
        let width = rng.random_range(GENERATED_MIN_WIDTH..=GENERATED_MAX_WIDTH);
        // First platform sits under the spawn point so a respawn always lands
        let x = if i == 0 {
            (design.x - width) / 2.0
        } else {
            rng.random_range(0.0..=(design.x - width).max(0.0))
        };
        platforms.push(PlatformSlot::new(x, y, width));
    }

    let coins = platforms.iter().map(|p| p.pos + COIN_OFFSET).collect();

    log::info!("Generated level {}: {} platforms", level, platforms.len());

    Layout { platforms, coins }
}

impl Layout {
    /// Instantiate the layout on a canvas scaled by `scale` (canvas / design)
    pub fn build(&self, scale: Vec2, tuning: &Tuning) -> (Vec<Platform>, Vec<Coin>) {
        let platforms = self
            .platforms
            .iter()
            .map(|slot| {
                Platform::new(
                    slot.pos.x * scale.x,
                    slot.pos.y * scale.y,
                    slot.width * scale.x,
                    tuning.platform_height,
                )
            })
            .collect();
        let coins = self
            .coins
            .iter()
            .map(|&pos| Coin::new(pos * scale, tuning))
            .collect();
        (platforms, coins)
    }
}
