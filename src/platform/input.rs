//! Keyboard interpretation
//!
//! The host delivers raw key codes; the keymap turns them into game commands.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// A key press the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle pause
    Pause,
    /// Restart after win/loss
    Confirm,
    /// Step the player one cell
    Move(Direction),
}

/// Raw key codes bound to each command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub pause: u32,
    pub confirm: u32,
    pub left: u32,
    pub up: u32,
    pub right: u32,
    pub down: u32,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            pause: 80,   // 'P'
            confirm: 13, // Enter
            left: 37,
            up: 38,
            right: 39,
            down: 40,
        }
    }
}

impl Keymap {
    /// Map a raw key code to a command (None for unbound keys)
    ///
    /// Pause and confirm are checked first so they win over a conflicting
    /// movement binding.
    pub fn resolve(&self, key_code: u32) -> Option<Command> {
        if key_code == self.pause {
            Some(Command::Pause)
        } else if key_code == self.confirm {
            Some(Command::Confirm)
        } else if key_code == self.left {
            Some(Command::Move(Direction::Left))
        } else if key_code == self.up {
            Some(Command::Move(Direction::Up))
        } else if key_code == self.right {
            Some(Command::Move(Direction::Right))
        } else if key_code == self.down {
            Some(Command::Move(Direction::Down))
        } else {
            None
        }
    }
}
