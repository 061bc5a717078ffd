// SPDX-License-Identifier: MPL-2.0
//! Single-threaded task scheduler with an injected clock.
//!
//! Page effects are short reactions to a single event, but several of them are
//! spread over time (a toast reveals, hides, then detaches). The [`Scheduler`]
//! makes that timing explicit instead of relying on a runtime's implicit timers.
//!
//! # Task kinds
//!
//! - **Immediate** - event-triggered work. It runs synchronously while the
//!   message is handled (`App::handle`) and never enters the scheduler.
//! - **Deferred** - queued with [`Scheduler::schedule_after`] or
//!   [`Scheduler::schedule_at`], run once the clock reaches the deadline. Tasks
//!   sharing a deadline run in insertion order.
//! - **Condition-triggered** - produced outside the scheduler, by
//!   [`crate::ui::reveal::Watcher::evaluate`] when a visibility threshold is crossed.
//!
//! Nothing here spawns threads or sleeps. The owner calls [`Scheduler::drain_due`]
//! with the current `Instant`, typically from a periodic tick.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// A task taken from the scheduler together with the instant it was due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due<T> {
    pub deadline: Instant,
    pub task: T,
}

#[derive(Debug)]
struct Timer<T> {
    deadline: Instant,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Timer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Timer<T> {}

impl<T> PartialOrd for Timer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Timer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Queue of deferred tasks.
#[derive(Debug)]
pub struct Scheduler<T> {
    timers: BinaryHeap<Reverse<Timer<T>>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            timers: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a task to run once `deadline` is reached.
    pub fn schedule_at(&mut self, deadline: Instant, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Reverse(Timer {
            deadline,
            seq,
            task,
        }));
    }

    /// Queues a task to run `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) {
        self.schedule_at(now + delay, task);
    }

    /// Removes and returns every task due at `now`.
    ///
    /// Tasks come out ordered by deadline, then insertion. Tasks queued while
    /// the caller processes the result are not included; drain again to pick
    /// them up.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Due<T>> {
        let mut due = Vec::new();

        while self
            .timers
            .peek()
            .is_some_and(|Reverse(timer)| timer.deadline <= now)
        {
            if let Some(Reverse(timer)) = self.timers.pop() {
                due.push(Due {
                    deadline: timer.deadline,
                    task: timer.task,
                });
            }
        }

        due
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.peek().map(|Reverse(timer)| timer.deadline)
    }
}
