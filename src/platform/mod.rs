//! Platform abstraction layer
//!
//! The simulation never touches a canvas, a timer or a keyboard directly.
//! These traits are what the host engine provides:
//! - `Renderer`: draw primitives, canvas size, overlay dialogs
//! - `Clock`: start/stop of the frame loop
//! - `input`: raw key codes and their interpretation

pub mod input;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use input::{Command, Keymap};

/// Text outline color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeColor {
    #[default]
    White,
    Yellow,
}

impl StrokeColor {
    /// RGBA hex for backends that want a concrete color
    pub fn rgba(&self) -> u32 {
        match self {
            StrokeColor::White => 0xFFFF_FFFF,
            StrokeColor::Yellow => 0xFFD7_00FF,
        }
    }
}

/// How a HUD string should be drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub stroke: StrokeColor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 20.0,
            stroke: StrokeColor::White,
        }
    }
}

/// Drawing surface provided by the engine
///
/// Sprites are addressed by identifier; the renderer resolves them through
/// its own resource cache.
pub trait Renderer {
    /// Called before each rendered frame
    fn begin_frame(&mut self) {}

    /// Canvas size in pixels
    fn canvas_size(&self) -> Vec2;

    /// Draw a sprite with its top-left corner at `pos`
    fn draw_image(&mut self, sprite: &str, pos: Vec2);

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);

    /// Show a modal overlay (pause, win, loss)
    fn show_dialog(&mut self, title: &str, message: &str);
}

/// Frame loop control provided by the engine
pub trait Clock {
    /// Resume delivering `update`/`render` ticks
    fn start(&mut self);

    /// Stop delivering `update` ticks
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Clock driven by hand (session driver, tests)
#[derive(Debug, Clone)]
pub struct ManualClock {
    running: bool,
    /// Number of start() calls
    pub starts: u32,
    /// Number of stop() calls
    pub stops: u32,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            running: true,
            starts: 0,
            stops: 0,
        }
    }
}

impl Clock for ManualClock {
    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
