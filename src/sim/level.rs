//! Levels: enemy/bonus rosters and the per-tick collision sweep

use super::bonus::{Bonus, Reward};
use super::enemy::{Crawler, Enemy, Patroller};
use super::entity::{Entity, Playfield, SimContext};
use super::player::{Direction, Player};
use crate::platform::Renderer;
use crate::tuning::{EnemySpawn, LevelDef};

/// What happened to the player during one level tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelReport {
    /// Player touched an enemy (already respawned)
    pub life_lost: bool,
    /// Sum of bonuses picked up this tick
    pub reward: Reward,
    /// Number of bonuses picked up this tick
    pub bonuses_collected: u32,
    /// Player stands on the goal row
    pub goal_reached: bool,
}

/// One level of the game
///
/// Owns its enemies and bonuses; the player is shared across levels and
/// handed in by the game on every call.
#[derive(Debug, Clone)]
pub struct Level {
    /// 1-based level number
    number: usize,
    background: Vec<String>,
    goal_row: u32,
    enemies: Vec<Enemy>,
    bonuses: Vec<Bonus>,
}

impl Level {
    /// Build a level from its content definition
    pub fn from_def(number: usize, def: &LevelDef, ctx: &mut SimContext<'_>) -> Self {
        let enemies: Vec<Enemy> = def
            .enemies
            .iter()
            .map(|spawn| match *spawn {
                EnemySpawn::Crawler => Enemy::from(Crawler::new(def.hitbox_scale, ctx)),
                EnemySpawn::Patroller { row } => {
                    Enemy::from(Patroller::new(def.hitbox_scale, row, ctx))
                }
            })
            .collect();
        let bonuses: Vec<Bonus> = def
            .bonuses
            .iter()
            .map(|b| Bonus::new(b.sprite.clone(), b.reward(), b.placement, def.hitbox_scale, ctx))
            .collect();

        Self {
            number,
            background: def.background.clone(),
            goal_row: def.goal_row.min(ctx.field.last_row()),
            enemies,
            bonuses,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn goal_row(&self) -> u32 {
        self.goal_row
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }

    /// Reset every enemy and bonus (idempotent)
    pub fn reset(&mut self, ctx: &mut SimContext<'_>) {
        for enemy in &mut self.enemies {
            enemy.reset(ctx);
        }
        for bonus in &mut self.bonuses {
            bonus.reset(ctx);
        }
    }

    /// Enter the level: player to the start cell, roster reset
    pub fn init_level(&mut self, player: &mut Player, ctx: &mut SimContext<'_>) {
        player.reset(ctx);
        self.reset(ctx);
    }

    /// Advance all entities and run the collision sweep
    ///
    /// Enemy hits are resolved before the goal check, so touching an enemy
    /// on the goal row costs a life instead of winning.
    pub fn update(&mut self, player: &mut Player, dt: f32, ctx: &mut SimContext<'_>) -> LevelReport {
        let mut report = LevelReport::default();

        player.update(dt, ctx);
        for enemy in &mut self.enemies {
            enemy.update(dt, ctx);
        }
        for bonus in &mut self.bonuses {
            bonus.update(dt, ctx);
        }

        if self.enemies.iter().any(|e| player.rect().overlaps(e.rect())) {
            log::debug!(
                "Level {}: player hit at ({}, {})",
                self.number,
                player.col(),
                player.row()
            );
            report.life_lost = true;
            player.reset(ctx);
        }

        for bonus in &mut self.bonuses {
            if bonus.is_active() && player.rect().overlaps(bonus.rect()) {
                if let Some(reward) = bonus.collect() {
                    log::debug!("Level {}: bonus collected {:?}", self.number, reward);
                    report.reward.add(reward);
                    report.bonuses_collected += 1;
                }
            }
        }

        if !report.life_lost && player.row() == self.goal_row {
            report.goal_reached = true;
        }

        report
    }

    /// Forward a movement command to the player
    pub fn handle_input(&self, player: &mut Player, direction: Direction, field: &Playfield) {
        player.step(direction, field);
    }

    /// Draw background tiles, bonuses, enemies, then the player
    pub fn render(&self, player: &Player, renderer: &mut dyn Renderer, field: &Playfield) {
        for (row, tile) in self.background.iter().enumerate() {
            for col in 0..field.cols {
                renderer.draw_image(tile, field.cell_origin(col, row as u32));
            }
        }
        for bonus in &self.bonuses {
            bonus.render(renderer);
        }
        for enemy in &self.enemies {
            enemy.render(renderer);
        }
        player.render(renderer);
    }
}
