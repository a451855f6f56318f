//! Per-frame simulation tick
//!
//! One call advances the game exactly one step. Physics is in units per tick;
//! the frame delta only drives the cosmetic clock.

use super::collision::straddles_top;
use super::entity::{Collidable, Movable};
use super::player::Command;
use super::state::{GameEvent, GameState};

/// Commands queued by the input layer since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, frame_ms: f32) {
    if !state.is_started() {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;
    state.time_ms += frame_ms;
    let time_ms = state.time_ms;

    for &command in &input.commands {
        state.player.apply(command);
    }

    // Gravity + integration
    state.player.update(time_ms);

    // Landing: every straddled platform snaps the player, last one wins
    for platform in &state.platforms {
        if straddles_top(&state.player.bounds(), &platform.bounds()) {
            state.player.land_at(platform.top());
        }
    }

    // Pickups
    let mut picked = 0;
    for (index, coin) in state.coins.iter_mut().enumerate() {
        if !coin.collected && state.player.intersects(&*coin) && coin.collect() {
            log::debug!("Coin {index} collected");
            state.events.push(GameEvent::CoinCollected { index });
            picked += 1;
        }
    }
    for _ in 0..picked {
        state.award(state.tuning.coin_score);
    }

    for coin in &mut state.coins {
        coin.update(time_ms);
    }

    // Hard side walls, velocity untouched
    let max_x = state.canvas.x - state.player.body.size().x;
    let pos = &mut state.player.body.pos;
    if pos.x < 0.0 {
        pos.x = 0.0;
    }
    if pos.x > max_x {
        pos.x = max_x;
    }

    if state.player.body.pos.y > state.canvas.y {
        state.fall_reset();
    }

    if state.level_complete() {
        state.advance_level();
    }
}
