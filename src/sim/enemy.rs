//! Enemy movement behaviors
//!
//! Two variants share the `Entity` contract:
//! - `Crawler`: crosses left to right, then respawns at the left edge in a
//!   freshly rolled lane with a freshly rolled speed
//! - `Patroller`: stays in its lane and bounces between the field edges,
//!   flipping its sprite and rolling a new speed on each bounce

use serde::{Deserialize, Serialize};

use super::entity::{Entity, SimContext};
use super::rect::Rect;

pub const CRAWLER_SPRITE: &str = "images/enemy-bug.png";
pub const CRAWLER_WIDTH: f32 = 98.0;
pub const CRAWLER_HEIGHT: f32 = 77.0;

pub const PATROLLER_SPRITE: &str = "images/enemy-shark-fin.png";
pub const PATROLLER_SPRITE_REVERSE: &str = "images/enemy-shark-fin-reverse.png";
pub const PATROLLER_WIDTH: f32 = 85.0;
pub const PATROLLER_HEIGHT: f32 = 80.0;

/// Horizontal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Right,
    Left,
}

impl Heading {
    /// Sign applied to displacement
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Heading::Right => 1.0,
            Heading::Left => -1.0,
        }
    }
}

/// Row-based enemy that crosses the field and respawns on exit
#[derive(Debug, Clone)]
pub struct Crawler {
    rect: Rect,
    /// px/s
    speed: f32,
    row: u32,
}

impl Crawler {
    pub fn new(hitbox_scale: f32, ctx: &mut SimContext<'_>) -> Self {
        let mut crawler = Self {
            rect: Rect::new(CRAWLER_WIDTH, CRAWLER_HEIGHT, hitbox_scale),
            speed: 0.0,
            row: 0,
        };
        crawler.reset(ctx);
        crawler
    }

    /// Roll lane and speed, move back to the left edge
    pub fn reset_position(&mut self, ctx: &mut SimContext<'_>) {
        self.speed = ctx.roll_speed();
        self.row = ctx.roll_lane();
        self.rect.update(0.0, ctx.field.row_center_y(self.row));
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    /// Horizontal position (hit-box center)
    pub fn x(&self) -> f32 {
        self.rect.center().x
    }
}

impl Entity for Crawler {
    fn sprite(&self) -> &str {
        CRAWLER_SPRITE
    }

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn reset(&mut self, ctx: &mut SimContext<'_>) {
        self.reset_position(ctx);
    }

    fn update(&mut self, dt: f32, ctx: &mut SimContext<'_>) {
        let center = self.rect.center();
        let x = center.x + self.speed * dt;
        if x >= ctx.field.width() {
            self.reset_position(ctx);
        } else {
            self.rect.update(x, center.y);
        }
    }
}

/// Lane-bound enemy that bounces between the field edges
#[derive(Debug, Clone)]
pub struct Patroller {
    rect: Rect,
    /// px/s
    speed: f32,
    row: u32,
    heading: Heading,
}

impl Patroller {
    pub fn new(hitbox_scale: f32, row: u32, ctx: &mut SimContext<'_>) -> Self {
        let mut patroller = Self {
            rect: Rect::new(PATROLLER_WIDTH, PATROLLER_HEIGHT, hitbox_scale),
            speed: 0.0,
            row: row.min(ctx.field.last_row()),
            heading: Heading::Right,
        };
        patroller.reset(ctx);
        patroller
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    fn bounce(&mut self, heading: Heading, ctx: &mut SimContext<'_>) {
        self.heading = heading;
        self.speed = ctx.roll_speed();
    }
}

impl Entity for Patroller {
    fn sprite(&self) -> &str {
        match self.heading {
            Heading::Right => PATROLLER_SPRITE,
            Heading::Left => PATROLLER_SPRITE_REVERSE,
        }
    }

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn reset(&mut self, ctx: &mut SimContext<'_>) {
        self.speed = ctx.roll_speed();
        self.heading = Heading::Right;
        self.rect.update(0.0, ctx.field.row_center_y(self.row));
    }

    fn update(&mut self, dt: f32, ctx: &mut SimContext<'_>) {
        let center = self.rect.center();
        let x = center.x + self.speed * dt * self.heading.sign();
        self.rect.update(x, center.y);

        // Only bounce off the edge we are heading into
        if self.heading == Heading::Right && self.rect.right() >= ctx.field.width() {
            self.bounce(Heading::Left, ctx);
        } else if self.heading == Heading::Left && self.rect.left() <= 0.0 {
            self.bounce(Heading::Right, ctx);
        }
    }
}

/// Closed set of enemy behaviors
#[derive(Debug, Clone)]
pub enum Enemy {
    Crawler(Crawler),
    Patroller(Patroller),
}

impl Enemy {
    pub fn speed(&self) -> f32 {
        match self {
            Enemy::Crawler(c) => c.speed(),
            Enemy::Patroller(p) => p.speed(),
        }
    }

    pub fn row(&self) -> u32 {
        match self {
            Enemy::Crawler(c) => c.row(),
            Enemy::Patroller(p) => p.row(),
        }
    }
}

impl Entity for Enemy {
    fn sprite(&self) -> &str {
        match self {
            Enemy::Crawler(c) => c.sprite(),
            Enemy::Patroller(p) => p.sprite(),
        }
    }

    fn rect(&self) -> &Rect {
        match self {
            Enemy::Crawler(c) => c.rect(),
            Enemy::Patroller(p) => p.rect(),
        }
    }

    fn reset(&mut self, ctx: &mut SimContext<'_>) {
        match self {
            Enemy::Crawler(c) => c.reset(ctx),
            Enemy::Patroller(p) => p.reset(ctx),
        }
    }

    fn update(&mut self, dt: f32, ctx: &mut SimContext<'_>) {
        match self {
            Enemy::Crawler(c) => c.update(dt, ctx),
            Enemy::Patroller(p) => p.update(dt, ctx),
        }
    }
}

impl From<Crawler> for Enemy {
    fn from(c: Crawler) -> Self {
        Enemy::Crawler(c)
    }
}

impl From<Patroller> for Enemy {
    fn from(p: Patroller) -> Self {
        Enemy::Patroller(p)
    }
}
