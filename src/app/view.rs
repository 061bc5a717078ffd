// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of three layers: the scrollable page, the fixed
//! navbar on top of it, and the toast overlay above everything.

use super::Message;
use crate::page::contact::ContactForm;
use crate::page::{BlockId, Catalog, Layout};
use crate::ui::navbar::{self, NavbarAppearance, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Presenter, Toast};
use crate::ui::reveal::Animator;
use crate::ui::sections::{self, ViewContext as SectionsViewContext};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{svg, Container, Id, Scrollable, Stack};
use iced::{Element, Length};
use std::collections::HashMap;
use std::time::Instant;

/// Id of the page scrollable, target of smooth-scroll operations.
pub const PAGE_SCROLLABLE_ID: &str = "storefront-page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub layout: &'a Layout,
    pub catalog: &'a Catalog,
    pub animator: &'a Animator<BlockId>,
    pub artwork: &'a HashMap<usize, svg::Handle>,
    pub parallax_offset: f32,
    pub contact: &'a ContactForm,
    pub notifications: &'a Presenter,
    pub navbar: NavbarAppearance,
    pub menu_open: bool,
    pub intro: f32,
    pub now: Instant,
}

/// Renders the page, navbar, and notifications.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = sections::view(&SectionsViewContext {
        layout: ctx.layout,
        catalog: ctx.catalog,
        animator: ctx.animator,
        artwork: ctx.artwork,
        parallax_offset: ctx.parallax_offset,
        contact: ctx.contact,
        intro: ctx.intro,
        now: ctx.now,
    })
    .map(Message::Page);

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::default()))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            bounds: viewport.bounds(),
            content_height: viewport.content_bounds().height,
            offset: viewport.absolute_offset(),
        });

    let navbar_view = navbar::view(NavbarViewContext {
        menu_open: ctx.menu_open,
        appearance: ctx.navbar,
        window_width: ctx.layout.width(),
    })
    .map(Message::Navbar);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.now);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable)
        .push(
            Container::new(navbar_view)
                .width(Length::Fill)
                .height(Length::Shrink),
        )
        .push(toasts)
        .into()
}
