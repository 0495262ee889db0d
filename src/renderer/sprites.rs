//! Sprite resource cache
//!
//! Maps sprite identifiers to opaque handles. The simulation only ever holds
//! identifiers; backends decode and draw whatever a handle stands for.

use std::collections::HashMap;

use crate::settings::Settings;
use crate::sim::enemy::{CRAWLER_SPRITE, PATROLLER_SPRITE, PATROLLER_SPRITE_REVERSE};
use crate::tuning::Tuning;

/// Opaque handle to a loaded sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u32);

#[derive(Debug, Clone, Default)]
pub struct SpriteCache {
    handles: HashMap<String, SpriteHandle>,
}

impl SpriteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sprite, returning its (possibly existing) handle
    pub fn load(&mut self, id: &str) -> SpriteHandle {
        if let Some(&handle) = self.handles.get(id) {
            return handle;
        }
        let handle = SpriteHandle(self.handles.len() as u32);
        self.handles.insert(id.to_string(), handle);
        handle
    }

    /// Register every sprite in `ids`
    pub fn preload<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.load(id);
        }
        log::debug!("Sprite cache holds {} sprites", self.handles.len());
    }

    pub fn get(&self, id: &str) -> Option<SpriteHandle> {
        self.handles.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Every sprite a game built from `settings` and `tuning` can draw
pub fn sprite_manifest(settings: &Settings, tuning: &Tuning) -> Vec<String> {
    let mut ids: Vec<String> = [
        CRAWLER_SPRITE,
        PATROLLER_SPRITE,
        PATROLLER_SPRITE_REVERSE,
        crate::hud::HEART_SPRITE,
    ]
    .into_iter()
    .map(String::from)
    .collect();
    ids.push(settings.player_sprite.clone());
    for level in &tuning.levels {
        ids.extend(level.background.iter().cloned());
        ids.extend(level.bonuses.iter().map(|b| b.sprite.clone()));
    }
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_is_idempotent() {
        let mut cache = SpriteCache::new();
        let a = cache.load("a.png");
        let b = cache.load("b.png");
        assert_ne!(a, b);
        assert_eq!(cache.load("a.png"), a);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("b.png"), Some(b));
        assert_eq!(cache.get("c.png"), None);
    }

    #[test]
    fn test_manifest_covers_builtin_levels() {
        let ids = sprite_manifest(&Settings::default(), &Tuning::default());
        assert!(ids.iter().any(|s| s == CRAWLER_SPRITE));
        assert!(ids.iter().any(|s| s == "images/water-block.png"));
        assert!(ids.iter().any(|s| s == "images/heart.png"));
        assert!(ids.iter().any(|s| s == "images/char-boy.png"));
        let mut sorted = ids.clone();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }
}
