// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action (a form
//! submission, a validation problem, a "coming soon" hint) without blocking the
//! page.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, severity levels, and lifecycle timing
//! - [`presenter`] - `Presenter` that attaches toasts and runs their timed lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Presenter, Severity, Toast};
//!
//! let mut presenter = Presenter::new();
//! presenter.present("Please fill in all required fields.", Severity::Error, Instant::now());
//!
//! // On every tick
//! presenter.tick(now);
//!
//! // In the view function
//! let overlay = Toast::view_overlay(&presenter, now);
//! ```
//!
//! # Lifecycle
//!
//! - 0ms: attached in the hidden/offset state
//! - 100ms: slides and fades in over 300ms
//! - 3000ms: slides and fades out over 300ms
//! - 3300ms: detached
//!
//! Every toast runs this sequence on its own. There is no cap, queue, or early
//! dismissal.

pub mod notification;
mod presenter;
mod toast;

pub use notification::{Appearance, Notification, NotificationId, Phase, Severity};
pub use presenter::{present_notification, Presenter};
pub use toast::Toast;
