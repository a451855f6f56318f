//! Scene painting
//!
//! Read-only over the game state: drawing never writes back into the simulation.
//! Order is background, platforms, coins, player.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use super::palette;
use super::surface::{Paint, Surface};
use crate::settings::Settings;
use crate::sim::{Coin, Collidable, GameState, Platform, Player, Rect};

/// Per-frame render context
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Cosmetic clock (ms)
    pub time_ms: f32,
    pub settings: &'a Settings,
}

impl Frame<'_> {
    /// Clock for decorative motion; frozen under reduced motion
    fn motion_ms(&self) -> f32 {
        if self.settings.reduced_motion { 0.0 } else { self.time_ms }
    }
}

pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface, frame: &Frame);
}

/// Paint the whole scene. Nothing is drawn before the game starts.
pub fn draw_scene(state: &GameState, surface: &mut dyn Surface, settings: &Settings) {
    if !state.is_started() {
        return;
    }
    let frame = Frame {
        time_ms: state.time_ms,
        settings,
    };

    draw_background(surface, &frame);
    for platform in &state.platforms {
        platform.draw(surface, &frame);
    }
    for coin in &state.coins {
        coin.draw(surface, &frame);
    }
    state.player.draw(surface, &frame);
}

fn draw_background(surface: &mut dyn Surface, frame: &Frame) {
    let size = surface.size();
    surface.fill_rect(
        Rect { pos: Vec2::ZERO, size },
        &Paint::Linear {
            from: Vec2::ZERO,
            to: Vec2::new(0.0, size.y),
            stops: [palette::BACKGROUND_TOP, palette::BACKGROUND_BOTTOM],
        },
    );

    // Stars orbit the canvas centre
    let half = size / 2.0;
    let t = frame.motion_ms() / 1000.0;
    for i in 0..frame.settings.quality.star_count() {
        let phase = t + i as f32;
        let center = Vec2::new(phase.sin() * half.x + half.x, phase.cos() * half.y + half.y);
        surface.fill_circle(center, 1.0, &Paint::Solid(palette::STAR));
    }
}

impl Drawable for Platform {
    fn draw(&self, surface: &mut dyn Surface, frame: &Frame) {
        let rect = self.bounds();
        surface.fill_round_rect(
            rect,
            5.0,
            &Paint::Linear {
                from: rect.pos,
                to: Vec2::new(rect.left(), rect.bottom()),
                stops: [palette::PLATFORM_TOP, palette::PLATFORM_BOTTOM],
            },
        );

        if frame.settings.quality.platform_stripes() {
            let stripe = Paint::Solid(palette::PLATFORM_STRIPE);
            let mut offset = 0.0;
            while offset < rect.size.x {
                surface.fill_round_rect(
                    Rect::new(rect.left() + offset, rect.top() + 5.0, 20.0, 3.0),
                    2.0,
                    &stripe,
                );
                offset += 30.0;
            }
        }
    }
}

impl Drawable for Coin {
    fn draw(&self, surface: &mut dyn Surface, _frame: &Frame) {
        if self.collected {
            return;
        }
        let center = self.bounds().center();
        let radius = self.body.size().x / 2.0;

        surface.fill_circle(
            center,
            radius,
            &Paint::Radial {
                center,
                radius,
                stops: [palette::COIN_CENTER, palette::COIN_EDGE],
            },
        );

        // Five-point star, spun by the coin's rotation
        let star: Vec<Vec2> = (0..5)
            .map(|i| {
                let angle = i as f32 * TAU / 5.0 - PI / 2.0 + self.rotation;
                center + Vec2::new(angle.cos(), angle.sin()) * (radius / 2.0)
            })
            .collect();
        surface.fill_polygon(&star, &Paint::Solid(palette::COIN_EDGE));
    }
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn Surface, frame: &Frame) {
        let (jump, wobble) = if frame.settings.effective_animation() {
            (self.jump_effect(frame.time_ms), self.move_effect(frame.time_ms))
        } else {
            (0.0, 0.0)
        };
        let rect = self.bounds();

        if let Some(url) = self.character.image_url() {
            let target = Rect {
                pos: rect.pos + Vec2::new(wobble, jump),
                size: rect.size,
            };
            if surface.draw_image(&url, target) {
                return;
            }
        }

        // Gradient body with a face
        let size = rect.size;
        let top_left = rect.pos + Vec2::new(0.0, jump);
        surface.fill_round_rect(
            Rect {
                pos: top_left,
                size: size + Vec2::new(0.0, wobble),
            },
            10.0,
            &Paint::Linear {
                from: rect.pos,
                to: rect.pos + size,
                stops: palette::character_gradient(&self.character.name),
            },
        );

        let eye = Paint::Solid(palette::FACE);
        let eye_radius = size.x / 8.0;
        surface.fill_circle(top_left + size * Vec2::new(0.25, 0.375), eye_radius, &eye);
        surface.fill_circle(top_left + size * Vec2::new(0.75, 0.375), eye_radius, &eye);
        surface.stroke_arc(
            top_left + size * Vec2::new(0.5, 0.625),
            size.x / 5.0,
            0.0,
            PI,
            palette::SMILE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::Character;
    use crate::renderer::draw_list::{DrawCmd, DrawList};
    use crate::settings::QualityPreset;
    use crate::tuning::Tuning;

    fn started(character: Character) -> GameState {
        let mut state = GameState::new(Vec2::new(800.0, 600.0), Tuning::default());
        state.start(character);
        state
    }

    fn low() -> Settings {
        Settings::from_preset(QualityPreset::Low)
    }

    #[test]
    fn test_title_draws_nothing() {
        let state = GameState::new(Vec2::new(800.0, 600.0), Tuning::default());
        let mut list = DrawList::new(state.canvas);
        draw_scene(&state, &mut list, &Settings::default());
        assert!(list.is_empty());
    }

    #[test]
    fn test_painter_order() {
        let state = started(Character::default());
        let mut list = DrawList::new(state.canvas);
        draw_scene(&state, &mut list, &low());

        // background, 3 platforms, 3 coins (disc + star), player (body, 2 eyes, smile)
        assert_eq!(list.len(), 1 + 3 + 3 * 2 + 4);
        assert!(matches!(list.commands[0], DrawCmd::Rect { .. }));
        assert!(
            list.commands[1..4]
                .iter()
                .all(|c| matches!(c, DrawCmd::RoundRect { radius, .. } if *radius == 5.0))
        );
        assert!(matches!(list.commands[4], DrawCmd::Circle { .. }));
        assert!(matches!(list.commands[5], DrawCmd::Polygon { .. }));
        assert!(matches!(list.commands[10], DrawCmd::RoundRect { radius, .. } if radius == 10.0));
        assert!(matches!(list.commands.last(), Some(DrawCmd::Arc { .. })));
    }

    #[test]
    fn test_collected_coins_are_hidden() {
        let mut state = started(Character::default());
        state.coins[1].collected = true;
        let mut list = DrawList::new(state.canvas);
        draw_scene(&state, &mut list, &low());
        let polygons = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Polygon { .. }))
            .count();
        assert_eq!(polygons, 2);
    }

    #[test]
    fn test_player_image_and_fallback() {
        let state = started(Character::new("Moana", Some("moana.png".to_string())));

        // Not loaded yet: gradient fallback keyed by name
        let mut list = DrawList::new(state.canvas);
        draw_scene(&state, &mut list, &low());
        let body = list
            .commands
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCmd::RoundRect { radius, paint, .. } if *radius == 10.0 => Some(*paint),
                _ => None,
            })
            .unwrap();
        assert!(matches!(body, Paint::Linear { stops, .. } if stops == ["#8be9fd", "#6272a4"]));

        // Loaded: a single blit replaces the body
        let mut list = DrawList::new(state.canvas);
        list.mark_loaded("images/moana.png");
        draw_scene(&state, &mut list, &low());
        assert!(matches!(
            list.commands.last(),
            Some(DrawCmd::Image { src, rect }) if src == "images/moana.png" && rect.pos == Vec2::new(400.0, 300.0)
        ));
    }

    #[test]
    fn test_star_count_follows_quality() {
        let state = started(Character::default());
        let count_stars = |settings: &Settings| {
            let mut list = DrawList::new(state.canvas);
            draw_scene(&state, &mut list, settings);
            list.commands
                .iter()
                .filter(|c| matches!(c, DrawCmd::Circle { radius, .. } if *radius == 1.0))
                .count()
        };
        assert_eq!(count_stars(&low()), 0);
        assert_eq!(count_stars(&Settings::default()), 50);
    }

    #[test]
    fn test_platform_stripes() {
        let platform = Platform::new(0.0, 100.0, 200.0, 20.0);
        let settings = Settings::default();
        let frame = Frame {
            time_ms: 0.0,
            settings: &settings,
        };
        let mut list = DrawList::new(Vec2::new(800.0, 600.0));
        platform.draw(&mut list, &frame);
        // body + stripes at 0, 30, ..., 180
        assert_eq!(list.len(), 1 + 7);
    }
}
