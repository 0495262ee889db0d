//! Shared entity contract and playfield geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::rng::RandomSource;
use crate::consts::*;
use crate::platform::Renderer;

/// Tile grid the game is played on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub cols: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
        }
    }
}

impl Playfield {
    /// Horizontal bound for enemy movement (canvas width)
    #[inline]
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Vertical center of a grid row
    #[inline]
    pub fn row_center_y(&self, row: u32) -> f32 {
        row as f32 * self.cell_height + self.cell_height / 2.0
    }

    /// Pixel center of a grid cell
    #[inline]
    pub fn cell_center(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(
            col as f32 * self.cell_width + self.cell_width / 2.0,
            self.row_center_y(row),
        )
    }

    /// Top-left pixel of a grid cell
    #[inline]
    pub fn cell_origin(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(col as f32 * self.cell_width, row as f32 * self.cell_height)
    }

    pub fn last_col(&self) -> u32 {
        self.cols.saturating_sub(1)
    }

    pub fn last_row(&self) -> u32 {
        self.rows.saturating_sub(1)
    }
}

/// Dependencies handed to entities on reset and update
pub struct SimContext<'a> {
    pub field: &'a Playfield,
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> SimContext<'a> {
    pub fn new(field: &'a Playfield, rng: &'a mut dyn RandomSource) -> Self {
        Self { field, rng }
    }

    /// Uniform roll of an enemy speed in px/s
    pub fn roll_speed(&mut self) -> f32 {
        self.rng.int_in(ENEMY_MIN_SPEED, ENEMY_MAX_SPEED) as f32
    }

    /// Uniform roll of an enemy lane
    pub fn roll_lane(&mut self) -> u32 {
        self.rng.int_in(LANE_MIN_ROW, LANE_MAX_ROW)
    }
}

/// Anything that occupies playfield space and is ticked every frame
///
/// `update` must not allocate and must scale any motion by `dt` so the game
/// runs at the same speed regardless of frame rate.
pub trait Entity {
    /// Sprite identifier resolved by the renderer
    fn sprite(&self) -> &str;

    /// Current hit-box
    fn rect(&self) -> &Rect;

    /// Return to the initial (possibly re-randomized) state without reallocating
    fn reset(&mut self, ctx: &mut SimContext<'_>);

    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32, ctx: &mut SimContext<'_>);

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw_image(self.sprite(), self.rect().sprite_origin());
    }
}
