//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform details:
//! - Motion scaled by the frame delta only
//! - Randomness through an injected `RandomSource` only
//! - No allocation in per-tick updates
//! - Stable iteration order (roster order)

pub mod bonus;
pub mod enemy;
pub mod entity;
pub mod game;
pub mod level;
pub mod player;
pub mod rect;
pub mod rng;

pub use bonus::{Bonus, BonusPlacement, Reward};
pub use enemy::{Crawler, Enemy, Heading, Patroller};
pub use entity::{Entity, Playfield, SimContext};
pub use game::{Dialog, Game, LifeState};
pub use level::{Level, LevelReport};
pub use player::{Direction, Player};
pub use rect::Rect;
pub use rng::{RandomSource, SequenceRandom, SimRng};
