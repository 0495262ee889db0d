//! Data-driven level content
//!
//! Which enemies, bonuses and background tiles each level uses. The built-in
//! roster ships six levels; a JSON file can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::GOAL_ROW;
use crate::sim::{BonusPlacement, Reward};

const WATER: &str = "images/water-block.png";
const STONE: &str = "images/stone-block.png";
const GRASS: &str = "images/grass-block.png";

/// An enemy slot in a level roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EnemySpawn {
    /// Lane is rolled on every respawn
    Crawler,
    /// Lane is fixed
    Patroller { row: u32 },
}

/// A bonus slot in a level roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusDef {
    pub sprite: String,
    #[serde(default)]
    pub score: u64,
    #[serde(default)]
    pub lives: u32,
    pub placement: BonusPlacement,
}

impl BonusDef {
    pub fn reward(&self) -> Reward {
        Reward {
            score: self.score,
            lives: self.lives,
        }
    }
}

/// Content of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Tile sprite for each grid row, top to bottom
    pub background: Vec<String>,
    /// Enemy and bonus hit-box scale
    #[serde(default = "default_hitbox_scale")]
    pub hitbox_scale: f32,
    /// Row that completes the level
    #[serde(default)]
    pub goal_row: u32,
    pub enemies: Vec<EnemySpawn>,
    #[serde(default)]
    pub bonuses: Vec<BonusDef>,
}

fn default_hitbox_scale() -> f32 {
    0.7
}

/// The full level roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub levels: Vec<LevelDef>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            levels: builtin_levels(),
        }
    }
}

impl Tuning {
    /// Parse a roster from JSON (no fallback)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.validated())
    }

    /// Load a roster file, falling back to the built-in levels
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded {} levels from {}", tuning.levels.len(), path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid level file {}: {}, using built-in levels", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using built-in levels", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace an empty roster with the built-in one
    pub fn validated(self) -> Self {
        if self.levels.is_empty() {
            log::warn!("Level roster is empty, using built-in levels");
            Self::default()
        } else {
            self
        }
    }
}

fn classic_background() -> Vec<String> {
    [WATER, STONE, STONE, STONE, GRASS, GRASS]
        .into_iter()
        .map(String::from)
        .collect()
}

fn river_background() -> Vec<String> {
    [WATER, STONE, WATER, STONE, GRASS, GRASS]
        .into_iter()
        .map(String::from)
        .collect()
}

fn gem(sprite: &str, score: u64) -> BonusDef {
    BonusDef {
        sprite: sprite.to_string(),
        score,
        lives: 0,
        placement: BonusPlacement::Random,
    }
}

fn heart(col: u32, row: u32) -> BonusDef {
    BonusDef {
        sprite: "images/heart.png".to_string(),
        score: 0,
        lives: 1,
        placement: BonusPlacement::Fixed { col, row },
    }
}

fn crawlers(n: usize) -> Vec<EnemySpawn> {
    vec![EnemySpawn::Crawler; n]
}

/// Six levels of escalating difficulty
pub fn builtin_levels() -> Vec<LevelDef> {
    let with_patrollers = |n: usize, rows: &[u32]| {
        let mut enemies = crawlers(n);
        enemies.extend(rows.iter().map(|&row| EnemySpawn::Patroller { row }));
        enemies
    };

    vec![
        LevelDef {
            background: classic_background(),
            hitbox_scale: 0.7,
            goal_row: GOAL_ROW,
            enemies: crawlers(3),
            bonuses: Vec::new(),
        },
        LevelDef {
            background: classic_background(),
            hitbox_scale: 0.7,
            goal_row: GOAL_ROW,
            enemies: crawlers(4),
            bonuses: vec![gem("images/gem-blue.png", 100)],
        },
        LevelDef {
            background: river_background(),
            hitbox_scale: 0.7,
            goal_row: GOAL_ROW,
            enemies: with_patrollers(3, &[2]),
            bonuses: vec![gem("images/gem-green.png", 150)],
        },
        LevelDef {
            background: river_background(),
            hitbox_scale: 0.72,
            goal_row: GOAL_ROW,
            enemies: with_patrollers(4, &[2]),
            bonuses: vec![heart(0, 2)],
        },
        LevelDef {
            background: river_background(),
            hitbox_scale: 0.75,
            goal_row: GOAL_ROW,
            enemies: with_patrollers(4, &[1, 2]),
            bonuses: vec![gem("images/gem-orange.png", 200)],
        },
        LevelDef {
            background: river_background(),
            hitbox_scale: 0.75,
            goal_row: GOAL_ROW,
            enemies: with_patrollers(5, &[2, 3]),
            bonuses: vec![gem("images/gem-orange.png", 250), heart(4, 1)],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_escalates() {
        let levels = builtin_levels();
        assert_eq!(levels.len(), 6);
        let counts: Vec<usize> = levels.iter().map(|l| l.enemies.len()).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(levels.iter().all(|l| l.background.len() == 6));
        assert!(!levels[0]
            .enemies
            .iter()
            .any(|e| matches!(e, EnemySpawn::Patroller { .. })));
    }

    #[test]
    fn test_parse_roster_json() {
        let json = r#"{
            "levels": [{
                "background": ["a.png", "b.png"],
                "enemies": [{"type": "crawler"}, {"type": "patroller", "row": 2}],
                "bonuses": [{
                    "sprite": "heart.png",
                    "lives": 1,
                    "placement": {"type": "fixed", "col": 1, "row": 1}
                }]
            }]
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        let level = &tuning.levels[0];
        assert_eq!(level.hitbox_scale, 0.7);
        assert_eq!(level.goal_row, 0);
        assert_eq!(level.enemies[1], EnemySpawn::Patroller { row: 2 });
        assert_eq!(level.bonuses[0].reward(), Reward { score: 0, lives: 1 });
    }

    #[test]
    fn test_empty_roster_falls_back() {
        let tuning = Tuning::from_json(r#"{"levels": []}"#).unwrap();
        assert_eq!(tuning.levels.len(), 6);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("{ nope").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load("/definitely/not/here.json");
        assert_eq!(tuning, Tuning::default());
    }
}
