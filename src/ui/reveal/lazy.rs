// SPDX-License-Identifier: MPL-2.0
//! Lazy image loading.
//!
//! Images start as placeholders that only know their `data_src`. The first
//! time one enters the viewport its `src` is set and it stops being watched.

use super::watcher::{WatchOptions, Watcher};
use iced::Rectangle;
use std::collections::HashMap;
use std::hash::Hash;

/// A lazily loaded image slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    /// Source to load once visible.
    pub data_src: String,
    /// Loaded source, `None` while still lazy.
    pub src: Option<String>,
}

impl LazyImage {
    #[must_use]
    pub fn new(data_src: impl Into<String>) -> Self {
        Self {
            data_src: data_src.into(),
            src: None,
        }
    }

    /// Whether the placeholder is still waiting to load.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        self.src.is_none()
    }
}

/// Watches lazy images with default watch options (any overlap counts).
#[derive(Debug, Clone)]
pub struct LazyImages<K> {
    watcher: Watcher<K>,
    images: HashMap<K, LazyImage>,
}

impl<K: Copy + Eq + Hash> Default for LazyImages<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> LazyImages<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            watcher: Watcher::new(WatchOptions::default()),
            images: HashMap::new(),
        }
    }

    /// Registers every `(key, data_src, bounds)` triple. Returns how many were
    /// new.
    pub fn observe_all<I, S>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = (K, S, Rectangle)>,
        S: Into<String>,
    {
        let mut added = 0;
        for (key, data_src, bounds) in images {
            if self.images.contains_key(&key) {
                continue;
            }
            self.images.insert(key, LazyImage::new(data_src));
            self.watcher.observe(key, bounds);
            added += 1;
        }
        added
    }

    /// Loads every placeholder that intersects `viewport`. Returns the keys
    /// that were loaded by this call.
    pub fn on_scroll(&mut self, viewport: Rectangle) -> Vec<K> {
        let entries = self.watcher.evaluate(viewport);
        let mut loaded = Vec::new();

        for entry in entries.into_iter().filter(|entry| entry.is_intersecting) {
            if let Some(image) = self.images.get_mut(&entry.target) {
                image.src = Some(image.data_src.clone());
                self.watcher.unobserve(entry.target);
                loaded.push(entry.target);
            }
        }

        loaded
    }

    /// Moves a placeholder that is still waiting.
    pub fn relayout(&mut self, key: K, bounds: Rectangle) -> bool {
        self.watcher.update_bounds(key, bounds)
    }

    #[must_use]
    pub fn get(&self, key: K) -> Option<&LazyImage> {
        self.images.get(&key)
    }

    /// Number of placeholders still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.watcher.len()
    }
}
