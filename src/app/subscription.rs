// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Tick period while something is animating (about 60 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates a periodic tick subscription for notification lifecycles, smooth
/// scrolling, and fade-ins. Idle pages receive no ticks.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the window resize subscription used to re-run the page layout.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
