//! Arcade Crossing - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, collision, levels, game state machine)
//! - `hud`: Status displays mirroring score/level/lives/pause
//! - `platform`: Renderer/clock/input collaborator interfaces
//! - `renderer`: Sprite lookup and a headless renderer
//! - `session`: Frame driver standing in for the engine loop
//! - `settings`: Runtime configuration
//! - `tuning`: Data-driven level content

pub mod hud;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use platform::Keymap;
pub use session::Session;
pub use settings::Settings;
pub use sim::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield grid
    pub const GRID_COLS: u32 = 5;
    pub const GRID_ROWS: u32 = 6;
    pub const CELL_WIDTH: f32 = 101.0;
    pub const CELL_HEIGHT: f32 = 83.0;

    /// Player spawn cell (bottom middle)
    pub const PLAYER_START_COL: u32 = 2;
    pub const PLAYER_START_ROW: u32 = 5;
    /// Row the player must reach to win a level
    pub const GOAL_ROW: u32 = 0;

    /// Enemy lanes (inclusive)
    pub const LANE_MIN_ROW: u32 = 1;
    pub const LANE_MAX_ROW: u32 = 3;

    /// Enemy speed roll range in px/s (inclusive)
    pub const ENEMY_MIN_SPEED: u32 = 200;
    pub const ENEMY_MAX_SPEED: u32 = 300;

    /// Score awarded for reaching the goal row
    pub const LEVEL_BONUS: u64 = 500;
    pub const INITIAL_LIVES: u32 = 3;

    /// Largest frame delta the session hands to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Clamp a raw frame delta to something the simulation can use.
///
/// Negative and non-finite deltas become zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
