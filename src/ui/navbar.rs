// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar.
//!
//! Shows the brand, one link per page section, and a hamburger toggle that
//! replaces the links on narrow windows. The bar turns translucent with a
//! deeper shadow once the page is scrolled past a threshold.

use crate::page::content::BRAND;
use crate::page::SectionId;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::font::Weight;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Color, Element, Font, Length, Shadow, Theme, Vector,
};

/// Window width at or below which links collapse into the hamburger menu.
pub const COLLAPSE_WIDTH: f32 = 768.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub menu_open: bool,
    pub appearance: NavbarAppearance,
    pub window_width: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    NavigateTo(SectionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    NavigateTo(SectionId),
}

/// Process a navbar message and return the corresponding event.
///
/// Following a link always closes the mobile menu.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::NavigateTo(section) => {
            *menu_open = false;
            Event::NavigateTo(section)
        }
    }
}

/// Background and shadow of the bar for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarAppearance {
    pub background_alpha: f32,
    /// Whether the content behind the bar should read as blurred.
    pub blurred: bool,
    pub shadow_alpha: f32,
    pub shadow_blur: f32,
}

impl NavbarAppearance {
    pub const TOP: NavbarAppearance = NavbarAppearance {
        background_alpha: opacity::OPAQUE,
        blurred: false,
        shadow_alpha: opacity::SHADOW,
        shadow_blur: 10.0,
    };

    pub const SCROLLED: NavbarAppearance = NavbarAppearance {
        background_alpha: opacity::NAVBAR_SCROLLED,
        blurred: true,
        shadow_alpha: opacity::SHADOW,
        shadow_blur: 20.0,
    };

    /// Appearance for a vertical scroll offset. Strictly past `threshold`
    /// counts as scrolled.
    #[must_use]
    pub fn for_offset(scroll_y: f32, threshold: f32) -> Self {
        if scroll_y > threshold {
            Self::SCROLLED
        } else {
            Self::TOP
        }
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.blurred
    }
}

impl Default for NavbarAppearance {
    fn default() -> Self {
        Self::TOP
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let collapsed = ctx.window_width <= COLLAPSE_WIDTH;
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(collapsed));

    if collapsed && ctx.menu_open {
        content = content.push(build_dropdown());
    }

    let appearance = ctx.appearance;
    Container::new(content)
        .width(Length::Fill)
        .style(move |_theme: &Theme| bar_style(appearance))
        .into()
}

fn build_top_bar<'a>(collapsed: bool) -> Element<'a, Message> {
    let brand = button(Text::new(BRAND).size(typography::TITLE_MD).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }))
    .on_press(Message::NavigateTo(SectionId::Home))
    .padding(0)
    .style(link_style);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if collapsed {
        let hamburger = button(Text::new("\u{2630}").size(typography::TITLE_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(link_style);
        row = row.push(hamburger);
    } else {
        for section in SectionId::ALL {
            row = row.push(nav_link(section));
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .into()
}

/// Build the dropdown menu listing every section.
fn build_dropdown<'a>() -> Element<'a, Message> {
    let menu_column = SectionId::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(nav_link(section))
        });

    Container::new(menu_column)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::WHITE.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: palette::GRAY_200,
            },
            ..Default::default()
        })
        .into()
}

fn nav_link<'a>(section: SectionId) -> Element<'a, Message> {
    button(Text::new(section.label()).size(typography::BODY))
        .on_press(Message::NavigateTo(section))
        .padding([spacing::XS, spacing::SM])
        .style(link_style)
        .into()
}

fn bar_style(appearance: NavbarAppearance) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: appearance.background_alpha,
                ..palette::WHITE
            }
            .into(),
        ),
        shadow: Shadow {
            color: Color {
                a: appearance.shadow_alpha,
                ..palette::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: appearance.shadow_blur,
        },
        ..Default::default()
    }
}

/// Style function for text links.
fn link_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_500,
        button::Status::Active | button::Status::Disabled => palette::GRAY_900,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}
