// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for tunable page behavior.
//! Toast timing is not configurable; it is fixed in
//! [`crate::ui::notifications::notification`].
//!
//! # Categories
//!
//! - **Navigation**: Section scroll offset and smooth-scroll duration
//! - **Navbar**: Scroll threshold for the condensed navbar style
//! - **Parallax**: Hero translation rate and width breakpoint
//! - **Notifications**: In-flight warning watermark

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Pixels subtracted from a section's top when scrolling to it, so the fixed
/// navbar does not cover the heading.
pub const DEFAULT_SCROLL_OFFSET: f32 = 70.0;

/// Minimum section scroll offset.
pub const MIN_SCROLL_OFFSET: f32 = 0.0;

/// Maximum section scroll offset.
pub const MAX_SCROLL_OFFSET: f32 = 300.0;

/// Default smooth-scroll duration (in milliseconds).
pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 500;

/// Minimum smooth-scroll duration (0 jumps directly).
pub const MIN_SMOOTH_SCROLL_MS: u64 = 0;

/// Maximum smooth-scroll duration (in milliseconds).
pub const MAX_SMOOTH_SCROLL_MS: u64 = 2000;

// ==========================================================================
// Navbar Defaults
// ==========================================================================

/// Scroll distance after which the navbar switches to its scrolled style.
pub const DEFAULT_NAVBAR_THRESHOLD: f32 = 50.0;

/// Minimum navbar threshold.
pub const MIN_NAVBAR_THRESHOLD: f32 = 0.0;

/// Maximum navbar threshold.
pub const MAX_NAVBAR_THRESHOLD: f32 = 1000.0;

// ==========================================================================
// Parallax Defaults
// ==========================================================================

/// Hero translation per scrolled pixel.
pub const DEFAULT_PARALLAX_RATE: f32 = -0.5;

/// Minimum parallax rate.
pub const MIN_PARALLAX_RATE: f32 = -1.0;

/// Maximum parallax rate.
pub const MAX_PARALLAX_RATE: f32 = 1.0;

/// Parallax only applies when the viewport is wider than this.
pub const DEFAULT_PARALLAX_MIN_WIDTH: f32 = 768.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Attached toasts above which the presenter logs a warning.
pub const DEFAULT_WARN_IN_FLIGHT: usize = 8;

/// Minimum warning watermark.
pub const MIN_WARN_IN_FLIGHT: usize = 1;

/// Maximum warning watermark.
pub const MAX_WARN_IN_FLIGHT: usize = 256;
