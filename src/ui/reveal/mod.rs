// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven visibility effects.
//!
//! - [`watcher`] - Generic viewport intersection watcher (threshold + root margin)
//! - [`animator`] - One-shot reveal-on-scroll for page blocks
//! - [`lazy`] - Lazy image loading on first visibility
//!
//! Rectangles are in page coordinates: the viewport passed to `on_scroll` is
//! the visible window of the page, offset by the current scroll position.

pub mod animator;
pub mod lazy;
pub mod watcher;

pub use animator::{reveal_options, Animator, RevealState, FADE_DURATION};
pub use lazy::{LazyImage, LazyImages};
pub use watcher::{Entry, RootMargin, WatchOptions, Watcher};

use crate::page::{BlockId, Layout};

/// Registers the page's animated blocks with a new animator.
///
/// Call once when the page is built. Dropping the returned animator stops all
/// observation.
#[must_use]
pub fn init_visibility_animator(layout: &Layout) -> Animator<BlockId> {
    let mut animator = Animator::new();
    let registered = animator.observe_all(layout.animated_blocks());
    tracing::debug!(registered, "visibility animator initialized");
    animator
}

