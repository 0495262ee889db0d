//! Rendering backends
//!
//! The game draws through the `platform::Renderer` trait. This module holds
//! the sprite resource cache and a headless backend that records draw calls.

pub mod headless;
pub mod sprites;

pub use headless::{DrawCall, HeadlessRenderer};
pub use sprites::{SpriteCache, SpriteHandle, sprite_manifest};
