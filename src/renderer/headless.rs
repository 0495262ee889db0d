//! Renderer that records draw calls instead of drawing
//!
//! Used by the native demo and by tests.

use glam::Vec2;

use super::sprites::{SpriteCache, SpriteHandle};
use crate::platform::{Renderer, TextStyle};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image { sprite: SpriteHandle, pos: Vec2 },
    Text { text: String, pos: Vec2, style: TextStyle },
}

#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    size: Vec2,
    sprites: SpriteCache,
    /// Reject sprites that were not preloaded
    strict: bool,
    /// Draw calls since the last `begin_frame`
    pub calls: Vec<DrawCall>,
    /// Dialogs shown since the last `begin_frame`
    pub dialogs: Vec<(String, String)>,
    /// Draws of sprites missing from the cache
    pub missing: u32,
    /// Frames begun
    pub frames: u64,
}

impl Default for HeadlessRenderer {
    /// Canvas of the default playfield; sprites are registered on first use
    fn default() -> Self {
        Self::new(Vec2::new(505.0, 606.0), SpriteCache::new())
    }
}

impl HeadlessRenderer {
    pub fn new(size: Vec2, sprites: SpriteCache) -> Self {
        Self {
            size,
            strict: !sprites.is_empty(),
            sprites,
            calls: Vec::new(),
            dialogs: Vec::new(),
            missing: 0,
            frames: 0,
        }
    }

    pub fn last_dialog(&self) -> Option<(&str, &str)> {
        self.dialogs.last().map(|(t, m)| (t.as_str(), m.as_str()))
    }

    pub fn image_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Image { .. }))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for HeadlessRenderer {
    /// Clear the recording for a new frame
    fn begin_frame(&mut self) {
        self.calls.clear();
        self.dialogs.clear();
        self.frames += 1;
    }

    fn canvas_size(&self) -> Vec2 {
        self.size
    }

    fn draw_image(&mut self, sprite: &str, pos: Vec2) {
        let handle = if self.strict {
            self.sprites.get(sprite)
        } else {
            Some(self.sprites.load(sprite))
        };
        match handle {
            Some(sprite) => self.calls.push(DrawCall::Image { sprite, pos }),
            None => {
                if self.missing == 0 {
                    log::warn!("Sprite not loaded: {}", sprite);
                }
                self.missing += 1;
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }

    fn show_dialog(&mut self, title: &str, message: &str) {
        self.dialogs.push((title.to_string(), message.to_string()));
    }
}
