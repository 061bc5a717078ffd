// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::view::PAGE_SCROLLABLE_ID;
use super::{App, Message};
use crate::page::contact::SUCCESS_MESSAGE;
use crate::page::navigation::{scroll_to_section, SmoothScroll};
use crate::page::{artwork, Layout};
use crate::ui::navbar::{self, NavbarAppearance};
use crate::ui::notifications::Severity;
use crate::ui::sections;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{Rectangle, Size, Task};
use std::time::Instant;

impl App {
    /// Single update entrypoint.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => self.handle_tick(now),
            other => {
                let now = Instant::now();
                self.now = now;
                self.handle(other, now)
            }
        }
    }

    /// Handles a non-tick message at an explicit time.
    pub fn handle(&mut self, message: Message, now: Instant) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message, &mut self.menu_open) {
                navbar::Event::None => Task::none(),
                navbar::Event::NavigateTo(section) => {
                    self.navigate_to(section.anchor(), now);
                    Task::none()
                }
            },
            Message::Page(message) => {
                self.handle_page(message, now);
                Task::none()
            }
            Message::Scrolled {
                bounds,
                content_height,
                offset,
            } => {
                self.handle_scrolled(bounds, content_height, offset, now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.handle_resize(size, now);
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    fn handle_page(&mut self, message: sections::Message, now: Instant) {
        match message {
            sections::Message::Navigate(section) => self.navigate_to(section.anchor(), now),
            sections::Message::ViewCollection(index) => {
                if let Some(item) = self.catalog.item(index) {
                    tracing::info!(collection = %item.title, "collection opened");
                    self.notifications
                        .present(item.open_message(), Severity::Info, now);
                }
            }
            sections::Message::ContactFieldChanged(field, value) => {
                self.contact.set(field, value);
            }
            sections::Message::ContactSubmitted => match self.contact.submit() {
                Ok(submission) => {
                    tracing::info!(
                        name = %submission.name,
                        email = %submission.email,
                        phone = submission.phone.as_deref().unwrap_or("-"),
                        message = %submission.message,
                        "contact form submitted"
                    );
                    self.notifications
                        .present(SUCCESS_MESSAGE, Severity::Success, now);
                }
                Err(err) => {
                    tracing::debug!(error = %err, "contact form rejected");
                    self.notifications
                        .present(err.to_string(), Severity::Error, now);
                }
            },
        }
    }

    fn handle_scrolled(
        &mut self,
        bounds: Rectangle,
        content_height: f32,
        offset: AbsoluteOffset,
        now: Instant,
    ) {
        self.viewport = Rectangle {
            x: 0.0,
            y: offset.y.max(0.0),
            width: bounds.width,
            height: bounds.height,
        };
        self.content_height = content_height;
        self.refresh_visibility(now);
    }

    fn handle_resize(&mut self, size: Size, now: Instant) {
        self.layout = Layout::compute(size.width, &self.catalog);
        for (block, bounds) in self.layout.animated_blocks() {
            self.animator.relayout(block, bounds);
        }
        for (index, bounds) in self.layout.artwork_slots() {
            self.lazy_images.relayout(index, bounds);
        }

        let max_scroll = self.layout.max_scroll(size.height);
        self.viewport = Rectangle {
            x: 0.0,
            y: self.viewport.y.min(max_scroll),
            width: size.width,
            height: size.height,
        };
        tracing::debug!(width = size.width, height = size.height, "page relaid out");
        self.refresh_visibility(now);
    }

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.now = now;
        if self.loaded_at.is_none() {
            self.loaded_at = Some(now);
            tracing::debug!("page loaded");
        }

        self.notifications.tick(now);
        self.step_smooth_scroll(now)
    }

    /// Starts a smooth scroll to the section named by `anchor`.
    ///
    /// Unknown anchors are logged and leave the scroll position unchanged.
    pub fn navigate_to(&mut self, anchor: &str, now: Instant) {
        let offset = self.config.navigation.scroll_offset();
        match scroll_to_section(&self.layout, anchor, offset) {
            Ok(target) => {
                let target = target.min(self.max_scroll());
                tracing::debug!(anchor, target, "smooth scroll started");
                self.smooth_scroll = Some(SmoothScroll::new(
                    self.viewport.y,
                    target,
                    now,
                    self.config.navigation.smooth_scroll_duration(),
                ));
            }
            Err(err) => tracing::warn!(error = %err, "navigation ignored"),
        }
    }

    fn step_smooth_scroll(&mut self, now: Instant) -> Task<Message> {
        let Some(scroll) = self.smooth_scroll else {
            return Task::none();
        };

        let position = scroll.position(now);
        if scroll.is_finished(now) {
            self.smooth_scroll = None;
        }

        self.viewport.y = position;
        self.refresh_visibility(now);

        let max_scroll = self.max_scroll();
        let relative = if max_scroll > 0.0 {
            (position / max_scroll).clamp(0.0, 1.0)
        } else {
            0.0
        };
        operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: relative },
        )
    }

    /// Largest scroll offset, from the widget's content height when known.
    fn max_scroll(&self) -> f32 {
        if self.content_height > 0.0 {
            (self.content_height - self.viewport.height).max(0.0)
        } else {
            self.layout.max_scroll(self.viewport.height)
        }
    }

    /// Re-evaluates everything that depends on the scroll position.
    pub(super) fn refresh_visibility(&mut self, now: Instant) {
        let scroll_y = self.viewport.y;

        self.navbar =
            NavbarAppearance::for_offset(scroll_y, self.config.navbar.scrolled_threshold());
        self.parallax.on_scroll(scroll_y, self.viewport.width);

        let revealed = self.animator.on_scroll(self.viewport, now);
        if !revealed.is_empty() {
            tracing::trace!(?revealed, "blocks revealed");
        }

        for index in self.lazy_images.on_scroll(self.viewport) {
            let Some(src) = self
                .lazy_images
                .get(index)
                .and_then(|image| image.src.clone())
            else {
                continue;
            };
            match artwork::load(&src) {
                Ok(handle) => {
                    self.artwork.insert(index, handle);
                }
                Err(err) => tracing::warn!(error = %err, "artwork not loaded"),
            }
        }
    }
}
