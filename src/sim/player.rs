//! The player: a grid-bound hopper

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Playfield, SimContext};
use super::rect::Rect;
use crate::consts::{PLAYER_START_COL, PLAYER_START_ROW};

pub const PLAYER_SPRITE: &str = "images/char-boy.png";
pub const PLAYER_WIDTH: f32 = 67.0;
pub const PLAYER_HEIGHT: f32 = 76.0;

/// One-cell step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Player entity
///
/// Has no velocity: every directional input moves exactly one cell, clamped
/// to the playfield.
#[derive(Debug, Clone)]
pub struct Player {
    sprite: String,
    rect: Rect,
    col: u32,
    row: u32,
    start_col: u32,
    start_row: u32,
}

impl Player {
    pub fn new(sprite: impl Into<String>, hitbox_scale: f32, field: &Playfield) -> Self {
        let start_col = PLAYER_START_COL.min(field.last_col());
        let start_row = PLAYER_START_ROW.min(field.last_row());
        let mut player = Self {
            sprite: sprite.into(),
            rect: Rect::new(PLAYER_WIDTH, PLAYER_HEIGHT, hitbox_scale),
            col: start_col,
            row: start_row,
            start_col,
            start_row,
        };
        player.respawn(field);
        player
    }

    /// Back to the start cell
    pub fn respawn(&mut self, field: &Playfield) {
        self.col = self.start_col;
        self.row = self.start_row;
        self.sync_rect(field);
    }

    /// Step one cell, staying inside the grid
    pub fn step(&mut self, direction: Direction, field: &Playfield) {
        match direction {
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(field.last_col()),
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(field.last_row()),
        }
        self.sync_rect(field);
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn is_at_start(&self) -> bool {
        self.col == self.start_col && self.row == self.start_row
    }

    fn sync_rect(&mut self, field: &Playfield) {
        let center = field.cell_center(self.col, self.row);
        self.rect.update(center.x, center.y);
    }
}

impl Entity for Player {
    fn sprite(&self) -> &str {
        &self.sprite
    }

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn reset(&mut self, ctx: &mut SimContext<'_>) {
        self.respawn(ctx.field);
    }

    fn update(&mut self, _dt: f32, ctx: &mut SimContext<'_>) {
        self.sync_rect(ctx.field);
    }
}
