// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal-on-scroll animator.
//!
//! Each registered element starts in the baseline (`fade-in`) state and is
//! revealed the first time it intersects the viewport, then dropped from
//! observation. Revealed elements never go back.

use super::watcher::{RootMargin, WatchOptions, Watcher};
use iced::Rectangle;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Class applied to every registered element.
pub const BASELINE_CLASS: &str = "fade-in";

/// Class added when an element is revealed.
pub const REVEALED_CLASS: &str = "visible";

/// Fraction of an element that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// The viewport's bottom edge is pulled up by this much for reveal checks.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Duration of the fade-in once revealed.
pub const FADE_DURATION: Duration = Duration::from_millis(600);

/// Watch options used by the animator: 10% threshold, `0 0 -50px 0` margin.
#[must_use]
pub fn reveal_options() -> WatchOptions {
    WatchOptions {
        threshold: REVEAL_THRESHOLD,
        root_margin: RootMargin::bottom(-REVEAL_BOTTOM_MARGIN),
    }
}

/// Reveal state of a registered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Observed, not yet revealed.
    Registered,
    /// Revealed at the given instant. Terminal.
    Revealed { at: Instant },
}

impl RevealState {
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed { .. })
    }

    /// Classes an element in this state carries.
    #[must_use]
    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            RevealState::Registered => &[BASELINE_CLASS],
            RevealState::Revealed { .. } => &[BASELINE_CLASS, REVEALED_CLASS],
        }
    }
}

/// Watches elements and reveals each one once.
#[derive(Debug, Clone)]
pub struct Animator<K> {
    watcher: Watcher<K>,
    states: HashMap<K, RevealState>,
}

impl<K: Copy + Eq + Hash> Default for Animator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> Animator<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            watcher: Watcher::new(reveal_options()),
            states: HashMap::new(),
        }
    }

    /// Registers an element. Elements that are already known, revealed or
    /// not, are left untouched and `false` is returned.
    pub fn register(&mut self, key: K, bounds: Rectangle) -> bool {
        if self.states.contains_key(&key) {
            return false;
        }
        self.states.insert(key, RevealState::Registered);
        self.watcher.observe(key, bounds);
        true
    }

    /// Registers every element yielded by `elements`. Returns how many were new.
    pub fn observe_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = (K, Rectangle)>,
    {
        elements
            .into_iter()
            .filter(|&(key, bounds)| self.register(key, bounds))
            .count()
    }

    /// Checks observed elements against `viewport` (page coordinates) and
    /// reveals those that intersect. Returns the newly revealed keys in
    /// delivery order.
    pub fn on_scroll(&mut self, viewport: Rectangle, now: Instant) -> Vec<K> {
        let entries = self.watcher.evaluate(viewport);

        entries
            .into_iter()
            .filter(|entry| entry.is_intersecting)
            .filter_map(|entry| self.reveal(entry.target, now).then_some(entry.target))
            .collect()
    }

    /// Reveals an element and stops observing it.
    ///
    /// Returns `false` without changing anything if the element is unknown or
    /// already revealed.
    pub fn reveal(&mut self, key: K, now: Instant) -> bool {
        match self.states.get_mut(&key) {
            Some(state @ RevealState::Registered) => {
                *state = RevealState::Revealed { at: now };
                self.watcher.unobserve(key);
                true
            }
            _ => false,
        }
    }

    /// Moves an element that is still observed. Revealed elements ignore this.
    pub fn relayout(&mut self, key: K, bounds: Rectangle) -> bool {
        self.watcher.update_bounds(key, bounds)
    }

    #[must_use]
    pub fn state(&self, key: K) -> Option<RevealState> {
        self.states.get(&key).copied()
    }

    #[must_use]
    pub fn is_revealed(&self, key: K) -> bool {
        self.state(key).is_some_and(|state| state.is_revealed())
    }

    #[must_use]
    pub fn is_observed(&self, key: K) -> bool {
        self.watcher.is_observed(key)
    }

    /// Number of elements still waiting to be revealed.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.watcher.len()
    }

    /// Fade progress in `[0, 1]`. Unknown elements are fully shown, registered
    /// ones fully hidden.
    #[must_use]
    pub fn presentation(&self, key: K, now: Instant) -> f32 {
        match self.state(key) {
            None => 1.0,
            Some(RevealState::Registered) => 0.0,
            Some(RevealState::Revealed { at }) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Whether any element is still mid-fade at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.states.values().any(|state| match state {
            RevealState::Revealed { at } => now.saturating_duration_since(*at) < FADE_DURATION,
            RevealState::Registered => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT_HEIGHT: f32 = 800.0;

    fn viewport_at(y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 1200.0,
            height: VIEWPORT_HEIGHT,
        }
    }

    fn block(y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 400.0,
            height: 100.0,
        }
    }

    #[test]
    fn registered_elements_carry_baseline_class() {
        let mut animator = Animator::new();
        assert!(animator.register("feature", block(2000.0)));

        let state = animator.state("feature").expect("registered");
        assert_eq!(state.classes(), &[BASELINE_CLASS]);
        assert!(animator.is_observed("feature"));
    }

    #[test]
    fn intersecting_element_is_revealed_and_unobserved() {
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.register("about", block(100.0));

        let revealed = animator.on_scroll(viewport_at(0.0), start);
        assert_eq!(revealed, vec!["about"]);
        assert!(animator.is_revealed("about"));
        assert!(!animator.is_observed("about"));
        assert_eq!(
            animator.state("about").map(|s| s.classes()),
            Some(&[BASELINE_CLASS, REVEALED_CLASS][..])
        );
    }

    #[test]
    fn bottom_margin_delays_reveal() {
        let start = Instant::now();
        let mut animator = Animator::new();
        // Top edge 30px above the viewport bottom: inside the raw viewport but
        // still within the 50px margin.
        animator.register("card", block(VIEWPORT_HEIGHT - 30.0));
        assert!(animator.on_scroll(viewport_at(0.0), start).is_empty());

        // Scrolling 40px more puts 20px (20%) above the margin line.
        let revealed = animator.on_scroll(viewport_at(40.0), start);
        assert_eq!(revealed, vec!["card"]);
    }

    #[test]
    fn reveal_is_idempotent() {
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.register("item", block(5000.0));

        assert!(animator.reveal("item", start));
        assert!(!animator.reveal("item", start + Duration::from_secs(1)));
        assert_eq!(
            animator.state("item"),
            Some(RevealState::Revealed { at: start })
        );
    }

    #[test]
    fn revealed_elements_never_revert() {
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.register("item", block(100.0));
        animator.on_scroll(viewport_at(0.0), start);

        // Scroll far away and back.
        assert!(animator.on_scroll(viewport_at(10_000.0), start).is_empty());
        assert!(animator.on_scroll(viewport_at(0.0), start).is_empty());
        assert!(animator.is_revealed("item"));
    }

    #[test]
    fn revealed_elements_are_not_registered_again() {
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.register("item", block(100.0));
        animator.on_scroll(viewport_at(0.0), start);

        assert!(!animator.register("item", block(100.0)));
        assert!(!animator.is_observed("item"));
        assert!(animator.is_revealed("item"));
    }

    #[test]
    fn observe_all_counts_new_elements() {
        let mut animator = Animator::new();
        let count = animator.observe_all([(1, block(0.0)), (2, block(200.0)), (1, block(0.0))]);
        assert_eq!(count, 2);
        assert_eq!(animator.observed_count(), 2);
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut animator: Animator<u8> = Animator::new();
        assert!(!animator.reveal(7, Instant::now()));
        assert!(animator.state(7).is_none());
    }

    #[test]
    fn presentation_fades_in_after_reveal() {
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.register("item", block(100.0));
        assert_eq!(animator.presentation("item", start), 0.0);

        animator.reveal("item", start);
        assert!(animator.is_animating(start));
        assert_eq!(animator.presentation("item", start + FADE_DURATION), 1.0);
        assert!(!animator.is_animating(start + FADE_DURATION));
    }

    #[test]
    fn relayout_moves_pending_elements() {
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.register("item", block(5000.0));

        assert!(animator.relayout("item", block(100.0)));
        assert_eq!(animator.on_scroll(viewport_at(0.0), start), vec!["item"]);
        assert!(!animator.relayout("item", block(300.0)));
    }
}
