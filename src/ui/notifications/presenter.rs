// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Presenter` owns every attached toast and drives each one through
//! insert, reveal, hide, and detach using its own scheduled steps. Toasts never
//! share steps, are never queued or capped, and cannot be dismissed early.

use super::notification::{
    Notification, NotificationId, Phase, Severity, DISPLAY_DURATION, REVEAL_DELAY,
    TRANSITION_DURATION,
};
use crate::config::DEFAULT_WARN_IN_FLIGHT;
use crate::scheduler::{Due, Scheduler};
use std::time::Instant;

/// A lifecycle step for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Reveal(NotificationId),
    Hide(NotificationId),
    Remove(NotificationId),
}

/// Presents notifications and runs their timed lifecycle.
#[derive(Debug)]
pub struct Presenter {
    /// Attached notifications, oldest first.
    elements: Vec<Notification>,
    scheduler: Scheduler<Step>,
    /// In-flight count above which a warning is logged.
    warn_in_flight: usize,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_warn_threshold(DEFAULT_WARN_IN_FLIGHT)
    }

    /// Creates an empty presenter that warns once more than `warn_in_flight`
    /// notifications are attached at the same time.
    #[must_use]
    pub fn with_warn_threshold(warn_in_flight: usize) -> Self {
        Self {
            elements: Vec::new(),
            scheduler: Scheduler::new(),
            warn_in_flight,
        }
    }

    /// Inserts a notification at `now` and schedules its reveal and hide steps.
    ///
    /// The toast is attached immediately in the hidden state, becomes visible
    /// after 100ms, starts hiding at 3000ms, and is detached 300ms later.
    pub fn present(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        let notification = Notification::new(severity, message, now);
        let id = notification.id();

        tracing::debug!(
            ?id,
            severity = %severity,
            message = notification.message(),
            "presenting notification"
        );

        self.elements.push(notification);
        self.scheduler
            .schedule_after(now, REVEAL_DELAY, Step::Reveal(id));
        self.scheduler
            .schedule_after(now, DISPLAY_DURATION, Step::Hide(id));

        if self.elements.len() > self.warn_in_flight {
            tracing::warn!(
                in_flight = self.elements.len(),
                threshold = self.warn_in_flight,
                "many notifications in flight"
            );
        }

        id
    }

    /// Applies every lifecycle step due at `now`.
    ///
    /// Steps queued by other steps (the detach that follows a hide) are picked
    /// up in the same call when they are already due. Returns `true` if any
    /// notification changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        loop {
            let due = self.scheduler.drain_due(now);
            if due.is_empty() {
                break;
            }
            for Due { deadline, task } in due {
                changed |= self.apply(task, deadline);
            }
        }

        changed
    }

    fn apply(&mut self, step: Step, deadline: Instant) -> bool {
        match step {
            Step::Reveal(id) => self.set_phase(id, Phase::Shown, deadline),
            Step::Hide(id) => {
                self.scheduler
                    .schedule_after(deadline, TRANSITION_DURATION, Step::Remove(id));
                self.set_phase(id, Phase::Leaving, deadline)
            }
            Step::Remove(id) => {
                let before = self.elements.len();
                self.elements.retain(|n| n.id() != id);
                let removed = self.elements.len() < before;
                if removed {
                    tracing::trace!(?id, "notification detached");
                }
                removed
            }
        }
    }

    fn set_phase(&mut self, id: NotificationId, phase: Phase, at: Instant) -> bool {
        match self.elements.iter_mut().find(|n| n.id() == id) {
            Some(notification) => {
                notification.set_phase(phase, at);
                true
            }
            None => false,
        }
    }

    /// Returns the attached notifications, oldest first.
    pub fn elements(&self) -> impl Iterator<Item = &Notification> {
        self.elements.iter()
    }

    /// Looks up an attached notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.elements.iter().find(|n| n.id() == id)
    }

    /// Whether the notification is still attached.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Number of attached notifications.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether there are any attached notifications.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Deadline of the next lifecycle step, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }
}

/// Presents a notification using a severity name.
///
/// Unknown or empty severity names are shown with the info style.
pub fn present_notification(
    presenter: &mut Presenter,
    message: impl Into<String>,
    severity: &str,
    now: Instant,
) -> NotificationId {
    presenter.present(message, Severity::from_name(severity), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::LIFETIME;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_presenter_is_empty() {
        let presenter = Presenter::new();
        assert_eq!(presenter.in_flight(), 0);
        assert!(!presenter.has_notifications());
        assert_eq!(presenter.next_deadline(), None);
    }

    #[test]
    fn present_attaches_immediately_in_hidden_state() {
        let start = Instant::now();
        let mut presenter = Presenter::new();
        let id = presenter.present("hello", Severity::Info, start);

        let notification = presenter.get(id).expect("attached");
        assert_eq!(notification.phase(), Phase::Entering);
        assert_eq!(presenter.next_deadline(), Some(start + REVEAL_DELAY));
    }

    #[test]
    fn lifecycle_steps_follow_fixed_timing() {
        let start = Instant::now();
        let mut presenter = Presenter::new();
        let id = presenter.present("hello", Severity::Info, start);

        presenter.tick(start + ms(99));
        assert_eq!(presenter.get(id).map(Notification::phase), Some(Phase::Entering));

        presenter.tick(start + ms(100));
        assert_eq!(presenter.get(id).map(Notification::phase), Some(Phase::Shown));

        presenter.tick(start + ms(2999));
        assert_eq!(presenter.get(id).map(Notification::phase), Some(Phase::Shown));

        presenter.tick(start + ms(3000));
        assert_eq!(presenter.get(id).map(Notification::phase), Some(Phase::Leaving));

        presenter.tick(start + ms(3299));
        assert!(presenter.contains(id));

        presenter.tick(start + ms(3300));
        assert!(!presenter.contains(id));
        assert!(!presenter.has_notifications());
    }

    #[test]
    fn late_tick_runs_all_due_steps_in_order() {
        let start = Instant::now();
        let mut presenter = Presenter::new();
        let id = presenter.present("late", Severity::Error, start);

        assert!(presenter.tick(start + ms(5000)));
        assert!(!presenter.contains(id));
        assert_eq!(presenter.next_deadline(), None);
    }

    #[test]
    fn removal_does_not_drift_with_tick_granularity() {
        let start = Instant::now();
        let mut presenter = Presenter::new();
        let id = presenter.present("coarse", Severity::Info, start);

        // Removal is scheduled from the hide deadline, not from the tick that
        // observed it, so it still lands at 3300ms.
        presenter.tick(start + ms(3250));
        assert!(presenter.contains(id));
        presenter.tick(start + LIFETIME);
        assert!(!presenter.contains(id));
    }

    #[test]
    fn concurrent_notifications_are_independent() {
        let start = Instant::now();
        let mut presenter = Presenter::new();
        let a = presenter.present("A", Severity::Error, start);
        let b = presenter.present("B", Severity::Success, start + ms(1));

        assert_eq!(presenter.in_flight(), 2);

        presenter.tick(start + ms(3300));
        assert!(!presenter.contains(a));
        let remaining = presenter.get(b).expect("B still attached");
        assert_eq!(remaining.message(), "B");
        assert_eq!(remaining.severity(), Severity::Success);

        presenter.tick(start + ms(3301));
        assert!(!presenter.contains(b));
    }

    #[test]
    fn duplicate_messages_are_not_coalesced() {
        let start = Instant::now();
        let mut presenter = Presenter::with_warn_threshold(2);
        for _ in 0..5 {
            presenter.present("same", Severity::Info, start);
        }
        assert_eq!(presenter.in_flight(), 5);
    }

    #[test]
    fn present_notification_resolves_severity_names() {
        let start = Instant::now();
        let mut presenter = Presenter::new();

        let cases = [
            ("info", Severity::Info),
            ("success", Severity::Success),
            ("error", Severity::Error),
            ("bogus", Severity::Info),
        ];
        for (name, expected) in cases {
            let id = present_notification(&mut presenter, "msg", name, start);
            assert_eq!(presenter.get(id).map(Notification::severity), Some(expected));
        }
    }
}
