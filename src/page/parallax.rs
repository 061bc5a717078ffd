// SPDX-License-Identifier: MPL-2.0
//! Hero parallax.
//!
//! On wide viewports the hero content moves at a fraction of the scroll
//! speed. On narrow viewports the last offset is kept as is.

use crate::config::ParallaxConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    enabled: bool,
    rate: f32,
    min_width: f32,
    offset: f32,
}

impl Parallax {
    #[must_use]
    pub fn new(rate: f32, min_width: f32) -> Self {
        Self {
            enabled: true,
            rate,
            min_width,
            offset: 0.0,
        }
    }

    #[must_use]
    pub fn from_config(config: &ParallaxConfig) -> Self {
        Self {
            enabled: config.enabled(),
            ..Self::new(config.rate(), config.min_width())
        }
    }

    /// Updates the offset for a scroll position. Returns `true` if it changed.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_width: f32) -> bool {
        if !self.enabled || viewport_width <= self.min_width {
            return false;
        }
        let offset = scroll_y * self.rate;
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }

    /// Current vertical translation of the hero content.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::from_config(&ParallaxConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_translates_at_rate() {
        let mut parallax = Parallax::default();
        assert!(parallax.on_scroll(200.0, 1280.0));
        assert_eq!(parallax.offset(), -100.0);
    }

    #[test]
    fn narrow_viewport_keeps_last_offset() {
        let mut parallax = Parallax::default();
        parallax.on_scroll(100.0, 1280.0);
        assert!(!parallax.on_scroll(400.0, 768.0));
        assert_eq!(parallax.offset(), -50.0);
    }

    #[test]
    fn disabled_parallax_never_moves() {
        let mut parallax = Parallax::from_config(&ParallaxConfig {
            enabled: Some(false),
            ..ParallaxConfig::default()
        });
        assert!(!parallax.on_scroll(500.0, 1920.0));
        assert_eq!(parallax.offset(), 0.0);
    }
}
