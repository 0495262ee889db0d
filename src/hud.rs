//! On-screen status displays
//!
//! Pure views: each display mirrors a value the game owns and keeps a
//! preformatted text buffer that is only rewritten when that value changes.

use std::fmt::Write;

use glam::Vec2;

use crate::platform::{Renderer, StrokeColor, TextStyle};

pub const HEART_SPRITE: &str = "images/heart-small.png";

/// Snapshot of the counters the HUD mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    pub score: u64,
    /// 1-based level number
    pub level: usize,
    pub lives: u32,
    /// Paused by the player; false once the game is won or lost
    pub paused: bool,
}

/// Text buffer that tracks the value it was formatted from
#[derive(Debug, Clone, Default)]
struct Label<T> {
    value: Option<T>,
    text: String,
}

impl<T: Copy + PartialEq> Label<T> {
    /// Reformat only when `value` changed
    fn refresh(&mut self, value: T, format: impl FnOnce(&mut String, T)) {
        if self.value != Some(value) {
            self.text.clear();
            format(&mut self.text, value);
            self.value = Some(value);
        }
    }

    fn clear(&mut self) {
        self.value = None;
        self.text.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreText {
    label: Label<u64>,
}

impl ScoreText {
    const POS: Vec2 = Vec2::new(10.0, 30.0);

    pub fn update(&mut self, status: &Status) {
        self.label.refresh(status.score, |buf, score| {
            let _ = write!(buf, "Score: {}", score);
        });
    }

    pub fn text(&self) -> &str {
        &self.label.text
    }

    pub fn reset(&mut self) {
        self.label.clear();
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text(self.text(), Self::POS, TextStyle::default());
    }
}

#[derive(Debug, Clone, Default)]
pub struct LevelText {
    label: Label<usize>,
}

impl LevelText {
    pub fn update(&mut self, status: &Status) {
        self.label.refresh(status.level, |buf, level| {
            let _ = write!(buf, "Level {}", level);
        });
    }

    pub fn text(&self) -> &str {
        &self.label.text
    }

    pub fn reset(&mut self) {
        self.label.clear();
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        let x = renderer.canvas_size().x / 2.0 - 40.0;
        renderer.draw_text(self.text(), Vec2::new(x, 30.0), TextStyle::default());
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeartImage;

impl HeartImage {
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let x = renderer.canvas_size().x - 90.0;
        renderer.draw_image(HEART_SPRITE, Vec2::new(x, 8.0));
    }
}

/// Lives counter; its outline turns yellow while a life is being lost
#[derive(Debug, Clone, Default)]
pub struct LivesText {
    label: Label<u32>,
    stroke: StrokeColor,
}

impl LivesText {
    pub fn update(&mut self, status: &Status) {
        self.label.refresh(status.lives, |buf, lives| {
            let _ = write!(buf, "x {}", lives);
        });
    }

    pub fn text(&self) -> &str {
        &self.label.text
    }

    pub fn stroke(&self) -> StrokeColor {
        self.stroke
    }

    pub fn set_stroke(&mut self, stroke: StrokeColor) {
        self.stroke = stroke;
    }

    pub fn reset(&mut self) {
        self.label.clear();
        self.stroke = StrokeColor::White;
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        let x = renderer.canvas_size().x - 50.0;
        let style = TextStyle {
            stroke: self.stroke,
            ..TextStyle::default()
        };
        renderer.draw_text(self.text(), Vec2::new(x, 30.0), style);
    }
}

/// Bottom hint about the pause key
#[derive(Debug, Clone, Default)]
pub struct PauseBanner {
    paused: bool,
}

impl PauseBanner {
    pub fn update(&mut self, status: &Status) {
        self.paused = status.paused;
    }

    pub fn text(&self) -> &'static str {
        if self.paused {
            "Press 'P' to resume"
        } else {
            "Press 'P' to pause"
        }
    }

    pub fn reset(&mut self) {
        self.paused = false;
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        let size = renderer.canvas_size();
        let style = TextStyle {
            size: 14.0,
            ..TextStyle::default()
        };
        renderer.draw_text(self.text(), Vec2::new(size.x / 2.0 - 70.0, size.y - 10.0), style);
    }
}

/// All status displays
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub score: ScoreText,
    pub level: LevelText,
    pub heart: HeartImage,
    pub lives: LivesText,
    pub pause: PauseBanner,
}

impl Hud {
    pub fn update(&mut self, status: &Status) {
        self.score.update(status);
        self.level.update(status);
        self.lives.update(status);
        self.pause.update(status);
    }

    pub fn reset(&mut self) {
        self.score.reset();
        self.level.reset();
        self.lives.reset();
        self.pause.reset();
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.score.render(renderer);
        self.level.render(renderer);
        self.heart.render(renderer);
        self.lives.render(renderer);
        self.pause.render(renderer);
    }
}
