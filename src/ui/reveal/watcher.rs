// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection watcher.
//!
//! A [`Watcher`] tracks target rectangles in page coordinates and reports
//! which of them intersect the viewport, once per change of state. It is the
//! condition-triggered source of work for the reveal animator and the lazy
//! image loader.

use iced::{Point, Rectangle};

/// Signed adjustment of the root rectangle edges, in pixels.
///
/// Positive values grow the root outward, negative values shrink it. A bottom
/// margin of `-50.0` makes targets count as visible only once they are 50px
/// above the viewport's bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    /// Margin that only adjusts the bottom edge.
    #[must_use]
    pub const fn bottom(bottom: f32) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom,
            left: 0.0,
        }
    }

    /// Applies the margin to a viewport rectangle.
    #[must_use]
    pub fn apply(&self, viewport: Rectangle) -> Rectangle {
        Rectangle {
            x: viewport.x - self.left,
            y: viewport.y - self.top,
            width: (viewport.width + self.left + self.right).max(0.0),
            height: (viewport.height + self.top + self.bottom).max(0.0),
        }
    }
}

/// Watch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchOptions {
    /// Fraction of the target area that must be inside the root.
    pub threshold: f32,
    pub root_margin: RootMargin,
}

/// A change in a target's visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<K> {
    pub target: K,
    /// Visible fraction of the target area, in `[0, 1]`.
    pub ratio: f32,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct Target<K> {
    key: K,
    bounds: Rectangle,
    /// Intersecting state reported last; `None` until the first evaluation.
    last: Option<bool>,
}

/// Tracks targets and reports intersection changes against a viewport.
#[derive(Debug, Clone)]
pub struct Watcher<K> {
    options: WatchOptions,
    targets: Vec<Target<K>>,
}

impl<K: Copy + PartialEq> Watcher<K> {
    #[must_use]
    pub fn new(options: WatchOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> WatchOptions {
        self.options
    }

    /// Starts watching `key`. Watching an already watched key replaces its
    /// bounds and resets its reported state.
    pub fn observe(&mut self, key: K, bounds: Rectangle) {
        match self.targets.iter_mut().find(|t| t.key == key) {
            Some(target) => {
                target.bounds = bounds;
                target.last = None;
            }
            None => self.targets.push(Target {
                key,
                bounds,
                last: None,
            }),
        }
    }

    /// Stops watching `key`. Returns `false` if it was not watched.
    pub fn unobserve(&mut self, key: K) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| t.key != key);
        self.targets.len() < before
    }

    /// Moves a watched target without resetting its reported state.
    pub fn update_bounds(&mut self, key: K, bounds: Rectangle) -> bool {
        match self.targets.iter_mut().find(|t| t.key == key) {
            Some(target) => {
                target.bounds = bounds;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_observed(&self, key: K) -> bool {
        self.targets.iter().any(|t| t.key == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Evaluates every target against `viewport` (page coordinates).
    ///
    /// A target produces an entry on its first evaluation and whenever its
    /// intersecting state flips. Entries come out in registration order.
    pub fn evaluate(&mut self, viewport: Rectangle) -> Vec<Entry<K>> {
        let root = self.options.root_margin.apply(viewport);
        let threshold = self.options.threshold;

        self.targets
            .iter_mut()
            .filter_map(|target| {
                let ratio = intersection_ratio(target.bounds, root);
                let is_intersecting = ratio > 0.0 && ratio >= threshold;

                if target.last == Some(is_intersecting) {
                    return None;
                }
                target.last = Some(is_intersecting);

                Some(Entry {
                    target: target.key,
                    ratio,
                    is_intersecting,
                })
            })
            .collect()
    }
}

/// Fraction of `target` covered by `root`.
///
/// Degenerate targets (zero area) count as fully visible when their origin
/// lies inside the root.
#[must_use]
pub fn intersection_ratio(target: Rectangle, root: Rectangle) -> f32 {
    let area = target.area();
    if area <= 0.0 {
        let inside = root.contains(Point::new(target.x, target.y));
        return if inside { 1.0 } else { 0.0 };
    }

    match target.intersection(&root) {
        Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_at(y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 1000.0,
            height: 800.0,
        }
    }

    fn block(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 100.0,
            y,
            width: 300.0,
            height,
        }
    }

    #[test]
    fn bottom_margin_shrinks_root() {
        let root = RootMargin::bottom(-50.0).apply(viewport_at(0.0));
        assert_eq!(root.height, 750.0);
        assert_eq!(root.y, 0.0);
    }

    #[test]
    fn ratio_reflects_partial_overlap() {
        let ratio = intersection_ratio(block(700.0, 200.0), viewport_at(0.0));
        assert!((ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ratio_is_zero_outside_root() {
        assert_eq!(intersection_ratio(block(900.0, 100.0), viewport_at(0.0)), 0.0);
    }

    #[test]
    fn degenerate_target_uses_origin() {
        assert_eq!(intersection_ratio(block(10.0, 0.0), viewport_at(0.0)), 1.0);
        assert_eq!(intersection_ratio(block(900.0, 0.0), viewport_at(0.0)), 0.0);
    }

    #[test]
    fn first_evaluation_reports_every_target() {
        let mut watcher = Watcher::new(WatchOptions::default());
        watcher.observe(1, block(100.0, 100.0));
        watcher.observe(2, block(2000.0, 100.0));

        let entries = watcher.evaluate(viewport_at(0.0));
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_intersecting);
        assert!(!entries[1].is_intersecting);
    }

    #[test]
    fn entries_only_fire_on_state_change() {
        let mut watcher = Watcher::new(WatchOptions::default());
        watcher.observe(1, block(100.0, 100.0));

        assert_eq!(watcher.evaluate(viewport_at(0.0)).len(), 1);
        assert!(watcher.evaluate(viewport_at(10.0)).is_empty());

        let entries = watcher.evaluate(viewport_at(5000.0));
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
    }

    #[test]
    fn threshold_must_be_reached() {
        let mut watcher = Watcher::new(WatchOptions {
            threshold: 0.1,
            root_margin: RootMargin::default(),
        });
        // 5px of a 100px block visible: 5%.
        watcher.observe(1, block(795.0, 100.0));
        let entries = watcher.evaluate(viewport_at(0.0));
        assert!(!entries[0].is_intersecting);

        // 20px visible: 20%.
        let entries = watcher.evaluate(viewport_at(15.0));
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn unobserved_targets_are_not_reported() {
        let mut watcher = Watcher::new(WatchOptions::default());
        watcher.observe(1, block(100.0, 100.0));
        assert!(watcher.unobserve(1));
        assert!(!watcher.unobserve(1));
        assert!(watcher.evaluate(viewport_at(0.0)).is_empty());
        assert!(watcher.is_empty());
    }

    #[test]
    fn update_bounds_keeps_reported_state() {
        let mut watcher = Watcher::new(WatchOptions::default());
        watcher.observe(1, block(100.0, 100.0));
        watcher.evaluate(viewport_at(0.0));

        assert!(watcher.update_bounds(1, block(150.0, 100.0)));
        assert!(watcher.evaluate(viewport_at(0.0)).is_empty());
    }
}
