// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Severity`, and the
//! timing constants of the toast lifecycle.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Delay between insertion and the start of the entry transition.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Time from insertion until the exit transition starts.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Length of the entry and exit transitions. The element is detached once the
/// exit transition has run for this long.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Total time a notification stays attached.
pub const LIFETIME: Duration = Duration::from_millis(3300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the toast background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue). Also the fallback for unknown names.
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something the user has to fix (red).
    Error,
}

impl Severity {
    /// Resolves a severity name. Anything other than `"success"` or `"error"`
    /// falls back to [`Severity::Info`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Returns the toast background color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual phase of a notification that is still attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, still in the hidden/offset state.
    Entering,
    /// Transitioning to, or resting in, the visible state.
    Shown,
    /// Transitioning back to the hidden/offset state.
    Leaving,
}

/// Resolved presentation of a toast at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    /// Horizontal offset as a fraction of the toast width (1.0 = fully off to
    /// the right, 0.0 = in place).
    pub offset: f32,
}

impl Appearance {
    pub const HIDDEN: Appearance = Appearance {
        opacity: 0.0,
        offset: 1.0,
    };

    pub const VISIBLE: Appearance = Appearance {
        opacity: 1.0,
        offset: 0.0,
    };

    fn lerp(from: Appearance, to: Appearance, t: f32) -> Appearance {
        Appearance {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset: from.offset + (to.offset - from.offset) * t,
        }
    }
}

/// Smoothstep easing over `[0, 1]`.
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    phase: Phase,
    phase_changed_at: Instant,
}

impl Notification {
    /// Creates a notification inserted at `now`, in the hidden/offset state.
    pub fn new(severity: Severity, message: impl Into<String>, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: now,
            phase: Phase::Entering,
            phase_changed_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the age of this notification at `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    pub(super) fn set_phase(&mut self, phase: Phase, at: Instant) {
        self.phase = phase;
        self.phase_changed_at = at;
    }

    /// Opacity and offset at `now`, following the current phase transition.
    #[must_use]
    pub fn appearance(&self, now: Instant) -> Appearance {
        let elapsed = now.saturating_duration_since(self.phase_changed_at);
        let progress = ease(elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32());

        match self.phase {
            Phase::Entering => Appearance::HIDDEN,
            Phase::Shown => Appearance::lerp(Appearance::HIDDEN, Appearance::VISIBLE, progress),
            Phase::Leaving => Appearance::lerp(Appearance::VISIBLE, Appearance::HIDDEN, progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let now = Instant::now();
        let n1 = Notification::new(Severity::Info, "test", now);
        let n2 = Notification::new(Severity::Info, "test", now);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_names_resolve_with_info_fallback() {
        assert_eq!(Severity::from_name("success"), Severity::Success);
        assert_eq!(Severity::from_name("error"), Severity::Error);
        assert_eq!(Severity::from_name("info"), Severity::Info);
        assert_eq!(Severity::from_name("warning"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
        assert_eq!(Severity::from_name("ERROR"), Severity::Info);
    }

    #[test]
    fn unrecognized_severity_uses_info_style() {
        assert_eq!(
            Severity::from_name("critical").color(),
            Severity::Info.color()
        );
    }

    #[test]
    fn severity_colors_match_palette() {
        assert_eq!(Severity::Success.color(), palette::SUCCESS_500);
        assert_eq!(Severity::Error.color(), palette::ERROR_500);
        assert_eq!(Severity::Info.color(), palette::INFO_500);
    }

    #[test]
    fn new_notification_starts_hidden() {
        let now = Instant::now();
        let notification = Notification::new(Severity::Success, "saved", now);

        assert_eq!(notification.phase(), Phase::Entering);
        assert_eq!(notification.appearance(now), Appearance::HIDDEN);
        assert_eq!(notification.message(), "saved");
    }

    #[test]
    fn shown_phase_eases_to_visible() {
        let start = Instant::now();
        let mut notification = Notification::new(Severity::Info, "hello", start);
        notification.set_phase(Phase::Shown, start + REVEAL_DELAY);

        let midway = notification.appearance(start + REVEAL_DELAY + TRANSITION_DURATION / 2);
        assert!(midway.opacity > 0.0 && midway.opacity < 1.0);

        let settled = notification.appearance(start + REVEAL_DELAY + TRANSITION_DURATION);
        assert_eq!(settled, Appearance::VISIBLE);
    }

    #[test]
    fn leaving_phase_eases_back_to_hidden() {
        let start = Instant::now();
        let mut notification = Notification::new(Severity::Info, "bye", start);
        notification.set_phase(Phase::Leaving, start + DISPLAY_DURATION);

        assert_eq!(
            notification.appearance(start + DISPLAY_DURATION),
            Appearance::VISIBLE
        );
        assert_eq!(notification.appearance(start + LIFETIME), Appearance::HIDDEN);
    }

    #[test]
    fn lifetime_is_display_plus_transition() {
        assert_eq!(LIFETIME, DISPLAY_DURATION + TRANSITION_DURATION);
    }
}
