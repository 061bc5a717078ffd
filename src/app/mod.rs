// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the page model, the visibility effects, the contact
//! form, and the notification presenter, and translates messages into state
//! changes and scroll operations.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::PAGE_SCROLLABLE_ID;

use crate::config::{self, paths, Config};
use crate::page::contact::ContactForm;
use crate::page::content::BRAND;
use crate::page::navigation::SmoothScroll;
use crate::page::parallax::Parallax;
use crate::page::{BlockId, Catalog, Layout};
use crate::ui::navbar::NavbarAppearance;
use crate::ui::notifications::{Presenter, Severity};
use crate::ui::reveal::{init_visibility_animator, Animator, LazyImages, FADE_DURATION};
use iced::widget::svg;
use iced::{window, Element, Rectangle, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    config: Config,
    catalog: Catalog,
    layout: Layout,
    /// Visible window of the page, in page coordinates.
    viewport: Rectangle,
    /// Height of the scrollable content as last reported by the widget.
    content_height: f32,
    menu_open: bool,
    navbar: NavbarAppearance,
    parallax: Parallax,
    animator: Animator<BlockId>,
    lazy_images: LazyImages<usize>,
    /// Artwork decoded so far, keyed by collection index.
    artwork: HashMap<usize, svg::Handle>,
    contact: ContactForm,
    smooth_scroll: Option<SmoothScroll>,
    notifications: Presenter,
    /// Set on the first tick; the page fades in from here.
    loaded_at: Option<Instant>,
    /// Time of the last processed message, used for rendering.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewport", &self.viewport)
            .field("menu_open", &self.menu_open)
            .field("notifications", &self.notifications.in_flight())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application from CLI flags, loading settings and
    /// registering every page element with the visibility effects.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, warning) = config::load();
        let mut app = Self::with_config(config, Instant::now());

        if let Some(warning) = warning {
            app.notifications.present(warning, Severity::Error, app.now);
        }

        (app, Task::none())
    }

    /// Builds the application state for a default-sized window.
    pub fn with_config(config: Config, now: Instant) -> Self {
        Self::with_window(
            config,
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            now,
        )
    }

    /// Builds the application state for a window of `size`.
    pub fn with_window(config: Config, size: Size, now: Instant) -> Self {
        let catalog = Catalog::storefront();
        let layout = Layout::compute(size.width, &catalog);
        let animator = init_visibility_animator(&layout);

        let mut lazy_images = LazyImages::new();
        lazy_images.observe_all(layout.artwork_slots().filter_map(|(index, bounds)| {
            catalog
                .item(index)
                .map(|item| (index, item.artwork.clone(), bounds))
        }));

        let mut app = Self {
            parallax: Parallax::from_config(&config.parallax),
            notifications: Presenter::with_warn_threshold(config.notifications.warn_in_flight()),
            config,
            catalog,
            layout,
            viewport: Rectangle {
                x: 0.0,
                y: 0.0,
                width: size.width,
                height: size.height,
            },
            content_height: 0.0,
            menu_open: false,
            navbar: NavbarAppearance::TOP,
            animator,
            lazy_images,
            artwork: HashMap::new(),
            contact: ContactForm::new(),
            smooth_scroll: None,
            loaded_at: None,
            now,
        };

        // Elements already on screen reveal without waiting for a scroll.
        app.refresh_visibility(now);
        app
    }

    fn title(&self) -> String {
        BRAND.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            layout: &self.layout,
            catalog: &self.catalog,
            animator: &self.animator,
            artwork: &self.artwork,
            parallax_offset: self.parallax.offset(),
            contact: &self.contact,
            notifications: &self.notifications,
            navbar: self.navbar,
            menu_open: self.menu_open,
            intro: self.intro(),
            now: self.now,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.needs_ticks()),
            subscription::create_resize_subscription(),
        ])
    }

    /// Whether anything on screen still changes with time.
    fn needs_ticks(&self) -> bool {
        !self.is_loaded()
            || self.intro() < 1.0
            || self.notifications.has_notifications()
            || self.smooth_scroll.is_some()
            || self.animator.is_animating(self.now)
    }

    /// Whether the first tick has been processed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    /// Page intro fade progress in `[0, 1]`.
    fn intro(&self) -> f32 {
        self.loaded_at.map_or(0.0, |at| {
            let elapsed = self.now.saturating_duration_since(at);
            (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0)
        })
    }

    #[must_use]
    pub fn notifications(&self) -> &Presenter {
        &self.notifications
    }

    #[must_use]
    pub fn animator(&self) -> &Animator<BlockId> {
        &self.animator
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    #[must_use]
    pub fn viewport(&self) -> Rectangle {
        self.viewport
    }

    #[must_use]
    pub fn navbar(&self) -> NavbarAppearance {
        self.navbar
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn has_artwork(&self, index: usize) -> bool {
        self.artwork.contains_key(&index)
    }

    #[must_use]
    pub fn smooth_scroll(&self) -> Option<&SmoothScroll> {
        self.smooth_scroll.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_reveals_blocks_above_the_fold_only() {
        let now = Instant::now();
        let app = App::with_config(Config::default(), now);

        assert!(!app.is_loaded());
        assert!(app.needs_ticks());
        assert!(app.animator().observed_count() > 0);

        // The about section is far below the first screen.
        assert!(!app.animator().is_revealed(BlockId::AboutText));
    }

    #[test]
    fn view_renders() {
        let app = App::with_config(Config::default(), Instant::now());
        let _element = app.view();
        assert_eq!(app.title(), BRAND);
    }

    #[test]
    fn debug_is_compact() {
        let app = App::with_config(Config::default(), Instant::now());
        assert!(format!("{app:?}").starts_with("App"));
    }
}
