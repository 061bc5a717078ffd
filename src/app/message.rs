// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::sections;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(sections::Message),
    /// The page scrollable moved.
    Scrolled {
        bounds: Rectangle,
        content_height: f32,
        offset: AbsoluteOffset,
    },
    /// Periodic tick driving notifications, smooth scroll, and fades.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STOREFRONT_FX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
