// SPDX-License-Identifier: MPL-2.0
//! Section anchors and smooth scrolling.

use super::{Layout, SectionId};
use crate::error::{Error, Result};
use std::time::{Duration, Instant};

/// Resolves the scroll offset that brings `anchor` under the fixed navbar.
///
/// The target is the section top minus `offset`, never above the page top.
///
/// # Errors
///
/// Returns [`Error::MissingAnchor`] when the anchor does not name a section
/// of the page.
pub fn scroll_to_section(layout: &Layout, anchor: &str, offset: f32) -> Result<f32> {
    let id = SectionId::from_anchor(anchor)
        .ok_or_else(|| Error::MissingAnchor(anchor.to_string()))?;
    let section = layout
        .section(id)
        .ok_or_else(|| Error::MissingAnchor(anchor.to_string()))?;

    Ok((section.offset_top - offset).max(0.0))
}

/// Cubic ease-in-out over `[0, 1]`.
fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-progress animated scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Scroll offset at `now`.
    #[must_use]
    pub fn position(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Catalog;

    #[test]
    fn scroll_target_accounts_for_navbar() {
        let layout = Layout::compute(1280.0, &Catalog::storefront());
        let about = layout.section(SectionId::About).copied().expect("about");

        let target = scroll_to_section(&layout, "#about", 70.0).expect("known anchor");
        assert_eq!(target, about.offset_top - 70.0);
    }

    #[test]
    fn scroll_target_never_goes_above_page_top() {
        let layout = Layout::compute(1280.0, &Catalog::storefront());
        assert_eq!(scroll_to_section(&layout, "home", 70.0), Ok(0.0));
    }

    #[test]
    fn unknown_anchor_is_an_error() {
        let layout = Layout::compute(1280.0, &Catalog::storefront());
        match scroll_to_section(&layout, "#pricing", 70.0) {
            Err(Error::MissingAnchor(anchor)) => assert_eq!(anchor, "#pricing"),
            other => panic!("expected MissingAnchor, got {other:?}"),
        }
    }

    #[test]
    fn smooth_scroll_starts_and_ends_on_target() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(0.0, 1000.0, start, Duration::from_millis(500));

        assert_eq!(scroll.position(start), 0.0);
        assert!(!scroll.is_finished(start + Duration::from_millis(499)));

        let midway = scroll.position(start + Duration::from_millis(250));
        assert!((midway - 500.0).abs() < 1.0);

        assert_eq!(scroll.position(start + Duration::from_millis(500)), 1000.0);
        assert!(scroll.is_finished(start + Duration::from_millis(500)));
    }

    #[test]
    fn zero_duration_jumps() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(300.0, 0.0, start, Duration::ZERO);
        assert_eq!(scroll.position(start), 0.0);
        assert!(scroll.is_finished(start));
    }
}
