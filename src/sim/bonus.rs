//! Collectible bonuses (gems, hearts)

use serde::{Deserialize, Serialize};

use super::entity::{Entity, SimContext};
use super::rect::Rect;
use crate::consts::{LANE_MAX_ROW, LANE_MIN_ROW};
use crate::platform::Renderer;

pub const BONUS_WIDTH: f32 = 70.0;
pub const BONUS_HEIGHT: f32 = 70.0;

/// What a bonus pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reward {
    pub score: u64,
    pub lives: u32,
}

impl Reward {
    pub fn is_empty(&self) -> bool {
        self.score == 0 && self.lives == 0
    }

    /// Accumulate another reward (saturating)
    pub fn add(&mut self, other: Reward) {
        self.score = self.score.saturating_add(other.score);
        self.lives = self.lives.saturating_add(other.lives);
    }
}

/// Where a bonus appears on level reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BonusPlacement {
    /// Always the same cell
    Fixed { col: u32, row: u32 },
    /// A random cell in the enemy lanes
    Random,
}

/// A pickup that pays out once per level life
#[derive(Debug, Clone)]
pub struct Bonus {
    sprite: String,
    rect: Rect,
    reward: Reward,
    placement: BonusPlacement,
    col: u32,
    row: u32,
    active: bool,
}

impl Bonus {
    pub fn new(
        sprite: impl Into<String>,
        reward: Reward,
        placement: BonusPlacement,
        hitbox_scale: f32,
        ctx: &mut SimContext<'_>,
    ) -> Self {
        let mut bonus = Self {
            sprite: sprite.into(),
            rect: Rect::new(BONUS_WIDTH, BONUS_HEIGHT, hitbox_scale),
            reward,
            placement,
            col: 0,
            row: 0,
            active: true,
        };
        bonus.reset(ctx);
        bonus
    }

    pub fn reward(&self) -> Reward {
        self.reward
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cell(&self) -> (u32, u32) {
        (self.col, self.row)
    }

    /// Take the reward and deactivate; None if already collected
    pub fn collect(&mut self) -> Option<Reward> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.reward)
    }
}

impl Entity for Bonus {
    fn sprite(&self) -> &str {
        &self.sprite
    }

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn reset(&mut self, ctx: &mut SimContext<'_>) {
        let field = ctx.field;
        let (col, row) = match self.placement {
            BonusPlacement::Fixed { col, row } => (col.min(field.last_col()), row.min(field.last_row())),
            BonusPlacement::Random => (
                ctx.rng.int_in(0, field.last_col()),
                ctx.rng.int_in(LANE_MIN_ROW, LANE_MAX_ROW.min(field.last_row())),
            ),
        };
        self.col = col;
        self.row = row;
        self.active = true;
        let center = field.cell_center(col, row);
        self.rect.update(center.x, center.y);
    }

    fn update(&mut self, _dt: f32, _ctx: &mut SimContext<'_>) {}

    fn render(&self, renderer: &mut dyn Renderer) {
        if self.active {
            renderer.draw_image(&self.sprite, self.rect.sprite_origin());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Playfield;
    use crate::sim::rng::SequenceRandom;

    #[test]
    fn test_collect_pays_out_once() {
        let field = Playfield::default();
        let mut rng = SequenceRandom::default();
        let mut ctx = SimContext::new(&field, &mut rng);
        let reward = Reward { score: 100, lives: 1 };
        let mut bonus = Bonus::new(
            "images/heart.png",
            reward,
            BonusPlacement::Fixed { col: 1, row: 2 },
            0.5,
            &mut ctx,
        );
        assert_eq!(bonus.collect(), Some(reward));
        assert!(!bonus.is_active());
        assert_eq!(bonus.collect(), None);

        bonus.reset(&mut ctx);
        assert!(bonus.is_active());
        assert_eq!(bonus.cell(), (1, 2));
    }

    #[test]
    fn test_random_placement_uses_lanes() {
        let field = Playfield::default();
        let mut rng = SequenceRandom::new([4, 3, 0, 9]);
        let mut ctx = SimContext::new(&field, &mut rng);
        let mut bonus = Bonus::new(
            "images/gem-blue.png",
            Reward { score: 50, lives: 0 },
            BonusPlacement::Random,
            0.5,
            &mut ctx,
        );
        assert_eq!(bonus.cell(), (4, 3));
        assert_eq!(bonus.rect().center(), field.cell_center(4, 3));
        bonus.reset(&mut ctx);
        assert_eq!(bonus.cell(), (0, 3));
    }

    #[test]
    fn test_fixed_placement_is_clamped() {
        let field = Playfield::default();
        let mut rng = SequenceRandom::default();
        let mut ctx = SimContext::new(&field, &mut rng);
        let bonus = Bonus::new(
            "images/gem-green.png",
            Reward::default(),
            BonusPlacement::Fixed { col: 40, row: 40 },
            0.5,
            &mut ctx,
        );
        assert_eq!(bonus.cell(), (4, 5));
    }

    #[test]
    fn test_reward_accumulates() {
        let mut total = Reward::default();
        assert!(total.is_empty());
        total.add(Reward { score: 100, lives: 1 });
        total.add(Reward { score: 50, lives: 0 });
        assert_eq!(total, Reward { score: 150, lives: 1 });
    }
}
