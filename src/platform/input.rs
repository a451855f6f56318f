//! Keyboard / touch translation into movement commands
//!
//! Event handlers call into `InputMapper` and queue whatever command comes back;
//! the next tick consumes the queue.

use crate::sim::Command;

/// Horizontal swipe distance (CSS px) before a touch counts as a move
pub const SWIPE_THRESHOLD: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Heading {
    Left,
    Right,
    #[default]
    Still,
}

#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    /// Direction of the last move command we emitted
    heading: Heading,
    /// Identifier and start x of the touch driving movement
    touch: Option<(i32, f32)>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass through a command from a direct source (on-screen buttons), keeping
    /// track of the heading it sets
    pub fn emit(&mut self, command: Command) -> Command {
        self.heading = match command {
            Command::MoveLeft => Heading::Left,
            Command::MoveRight => Heading::Right,
            Command::Stop => Heading::Still,
            Command::Jump => self.heading,
        };
        command
    }

    pub fn key_down(&mut self, key: &str) -> Option<Command> {
        let command = match key {
            "ArrowLeft" => Command::MoveLeft,
            "ArrowRight" => Command::MoveRight,
            "ArrowUp" | " " => Command::Jump,
            _ => return None,
        };
        Some(self.emit(command))
    }

    /// Releasing an arrow only stops if we're still heading that way
    pub fn key_up(&mut self, key: &str) -> Option<Command> {
        let releases = match key {
            "ArrowLeft" => Heading::Left,
            "ArrowRight" => Heading::Right,
            _ => return None,
        };
        (self.heading == releases).then(|| self.emit(Command::Stop))
    }

    /// A tap in the top half of the canvas jumps
    pub fn touch_start(&mut self, id: i32, x: f32, y: f32, canvas_height: f32) -> Option<Command> {
        self.touch = Some((id, x));
        (y < canvas_height / 2.0).then(|| self.emit(Command::Jump))
    }

    pub fn touch_move(&mut self, id: i32, x: f32) -> Option<Command> {
        let (tracked, start_x) = self.touch?;
        if tracked != id {
            return None;
        }
        let dx = x - start_x;
        if dx < -SWIPE_THRESHOLD {
            Some(self.emit(Command::MoveLeft))
        } else if dx > SWIPE_THRESHOLD {
            Some(self.emit(Command::MoveRight))
        } else {
            None
        }
    }

    pub fn touch_end(&mut self, id: i32) -> Option<Command> {
        match self.touch {
            Some((tracked, _)) if tracked == id => {
                self.touch = None;
                Some(self.emit(Command::Stop))
            }
            _ => None,
        }
    }

    pub fn touch_cancel(&mut self) -> Command {
        self.touch = None;
        self.emit(Command::Stop)
    }
}
