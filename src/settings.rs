//! Game settings
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_LIVES, LEVEL_BONUS, MAX_FRAME_DT};
use crate::platform::Keymap;
use crate::sim::player::PLAYER_SPRITE;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (None = derive from the system clock)
    pub seed: Option<u64>,
    /// Lives at the start of a run
    pub initial_lives: u32,
    /// Score for reaching the goal row
    pub level_bonus: u64,
    /// Player character sprite
    pub player_sprite: String,
    /// Player hit-box scale in (0, 1]
    pub player_hitbox_scale: f32,
    /// Largest delta the session passes to `update`
    pub max_frame_dt: f32,
    pub keymap: Keymap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            initial_lives: INITIAL_LIVES,
            level_bonus: LEVEL_BONUS,
            player_sprite: PLAYER_SPRITE.to_string(),
            player_hitbox_scale: 0.6,
            max_frame_dt: MAX_FRAME_DT,
            keymap: Keymap::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON (no fallback)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings file {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values the game cannot run with
    pub fn validated(mut self) -> Self {
        if self.initial_lives == 0 {
            log::warn!("initial_lives = 0, raising to 1");
            self.initial_lives = 1;
        }
        if !(self.player_hitbox_scale > 0.0 && self.player_hitbox_scale <= 1.0) {
            log::warn!("player_hitbox_scale {} out of range, using default", self.player_hitbox_scale);
            self.player_hitbox_scale = Self::default().player_hitbox_scale;
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            log::warn!("max_frame_dt {} out of range, using default", self.max_frame_dt);
            self.max_frame_dt = MAX_FRAME_DT;
        }
        self
    }

    /// Configured seed, or one derived from the host clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}
