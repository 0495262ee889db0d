//! Scaled axis-aligned hit-boxes
//!
//! Every entity carries one `Rect`. The stored box is the *scaled* box: the
//! sprite's width/height shrunk by `scale` around the sprite center, so two
//! sprites can touch visually before they collide logically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned collision rectangle with a hit-box shrink factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Sprite width (unscaled)
    width: f32,
    /// Sprite height (unscaled)
    height: f32,
    /// Hit-box shrink factor in (0, 1]
    scale: f32,
    /// Left edge of the scaled box
    left: f32,
    /// Top edge of the scaled box
    top: f32,
}

impl Rect {
    /// Create a rect centered at the origin.
    ///
    /// A scale outside (0, 1] is clamped into range.
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        let mut rect = Self {
            width: width.max(0.0),
            height: height.max(0.0),
            scale: clamp_scale(scale),
            left: 0.0,
            top: 0.0,
        };
        rect.update(0.0, 0.0);
        rect
    }

    /// Recompute the scaled edges around a new center point
    pub fn update(&mut self, center_x: f32, center_y: f32) {
        self.left = center_x - self.scaled_width() / 2.0;
        self.top = center_y - self.scaled_height() / 2.0;
    }

    /// Standard separating-axis test on the scaled boxes
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left
            || self.left > other.right()
            || self.bottom() < other.top
            || self.top > other.bottom())
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.scaled_width()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.scaled_height()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn scaled_width(&self) -> f32 {
        self.width * self.scale
    }

    #[inline]
    pub fn scaled_height(&self) -> f32 {
        self.height * self.scale
    }

    /// Center of the box (shared by the sprite and the hit-box)
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.scaled_width() / 2.0,
            self.top + self.scaled_height() / 2.0,
        )
    }

    /// Top-left corner of the full, unscaled sprite
    pub fn sprite_origin(&self) -> Vec2 {
        self.center() - Vec2::new(self.width, self.height) / 2.0
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 && scale <= 1.0 {
        scale
    } else {
        log::warn!("Hit-box scale {} out of range (0, 1], clamping", scale);
        if scale.is_finite() && scale > 1.0 { 1.0 } else { f32::EPSILON }
    }
}
