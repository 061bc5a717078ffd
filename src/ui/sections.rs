// SPDX-License-Identifier: MPL-2.0
//! Page sections.
//!
//! Every section is rendered with the measurements of [`Layout`], so what the
//! user sees lines up with the rectangles the reveal animator and lazy image
//! loader check against.

use crate::page::contact::{ContactForm, Field};
use crate::page::content::{
    ABOUT_TEXT, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_HOURS, CONTACT_PHONE, HERO_CTA,
    HERO_SUBTITLE, HERO_TITLE,
};
use crate::page::{
    BlockId, Catalog, Layout, SectionId, ABOUT_TEXT_HEIGHT, ARTWORK_HEIGHT,
    COLLECTION_CARD_HEIGHT, CONTACT_FORM_HEIGHT, CONTACT_INFO_HEIGHT, FEATURE_CARD_HEIGHT,
    GRID_GAP, HERO_HEIGHT, MAX_CONTENT_WIDTH, SECTION_HEADER_HEIGHT, SECTION_PADDING,
    SIDE_PADDING,
};
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use crate::ui::reveal::Animator;
use iced::font::Weight;
use iced::gradient::Linear;
use iced::widget::{button, container, svg, text_input, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Color, Degrees, Element, Font, Length, Shadow, Theme,
};
use std::collections::HashMap;
use std::time::Instant;

/// Vertical travel of a block while it fades in.
pub const FADE_SHIFT: f32 = 30.0;

/// Distance from the hero top to its content when the page is not scrolled.
const HERO_CONTENT_TOP: f32 = 180.0;

/// Messages emitted by the page body.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigate(SectionId),
    ViewCollection(usize),
    ContactFieldChanged(Field, String),
    ContactSubmitted,
}

/// Contextual data needed to render the page body.
pub struct ViewContext<'a> {
    pub layout: &'a Layout,
    pub catalog: &'a Catalog,
    pub animator: &'a Animator<BlockId>,
    /// Artwork that has been loaded, keyed by collection index.
    pub artwork: &'a HashMap<usize, svg::Handle>,
    pub parallax_offset: f32,
    pub contact: &'a ContactForm,
    /// Page intro fade in `[0, 1]`, starting once the page is loaded.
    pub intro: f32,
    pub now: Instant,
}

impl ViewContext<'_> {
    fn progress(&self, block: BlockId) -> f32 {
        self.animator.presentation(block, self.now)
    }
}

/// Render all sections top to bottom.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero(ctx))
        .push(collections(ctx))
        .push(features(ctx))
        .push(about(ctx))
        .push(contact(ctx))
        .into()
}

// ==========================================================================
// Hero
// ==========================================================================

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(HERO_TITLE)
        .size(typography::DISPLAY)
        .font(bold())
        .center();
    let subtitle = Text::new(HERO_SUBTITLE).size(typography::TITLE_MD).center();
    let cta = button(Text::new(HERO_CTA).size(typography::BODY).font(bold()))
        .on_press(Message::Navigate(SectionId::Collections))
        .padding([spacing::SM, spacing::XL])
        .style(primary_button_style);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(title)
        .push(subtitle)
        .push(cta);

    let top = (HERO_CONTENT_TOP + ctx.parallax_offset).max(0.0);
    let intro = ctx.intro.clamp(0.0, 1.0);
    let shifted = Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(top)))
        .push(content);

    Container::new(shifted)
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .padding([0.0, SIDE_PADDING])
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Gradient(
                Linear::new(Degrees(135.0))
                    .add_stop(0.0, palette::HERO_START)
                    .add_stop(1.0, palette::BRAND_500)
                    .into(),
            )),
            text_color: Some(Color {
                a: intro,
                ..palette::WHITE
            }),
            ..Default::default()
        })
        .into()
}

// ==========================================================================
// Collections
// ==========================================================================

fn collections<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .catalog
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let artwork: Element<'a, Message> = match ctx.artwork.get(&index) {
                Some(handle) => svg::Svg::new(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(ARTWORK_HEIGHT))
                    .into(),
                None => Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(ARTWORK_HEIGHT))
                    .style(|_theme: &Theme| container::Style {
                        background: Some(palette::GRAY_200.into()),
                        ..Default::default()
                    })
                    .into(),
            };

            let body = Column::new()
                .spacing(spacing::XS)
                .padding(spacing::MD)
                .push(Text::new(item.title.as_str()).size(typography::TITLE_MD).font(bold()))
                .push(
                    Text::new(item.description.as_str())
                        .size(typography::BODY)
                        .color(palette::GRAY_700),
                )
                .push(
                    button(Text::new("View Collection").size(typography::BODY))
                        .on_press(Message::ViewCollection(index))
                        .padding([spacing::XS, spacing::LG])
                        .style(primary_button_style),
                );

            let card = Column::new().push(artwork).push(body);
            fade_in(
                card,
                ctx.progress(BlockId::CollectionItem(index)),
                COLLECTION_CARD_HEIGHT,
                true,
            )
        })
        .collect();

    section_frame(
        "Our Collections",
        grid(cards, ctx.layout.collection_columns()),
        palette::WHITE,
    )
}

// ==========================================================================
// Features
// ==========================================================================

fn features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .catalog
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let card = Column::new()
                .spacing(spacing::SM)
                .padding(spacing::LG)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(feature.title.as_str())
                        .size(typography::TITLE_MD)
                        .font(bold()),
                )
                .push(
                    Text::new(feature.description.as_str())
                        .size(typography::BODY)
                        .center(),
                );
            fade_in(
                card,
                ctx.progress(BlockId::Feature(index)),
                FEATURE_CARD_HEIGHT,
                true,
            )
        })
        .collect();

    section_frame(
        "Why Choose Us",
        grid(cards, ctx.layout.feature_columns()),
        palette::GRAY_100,
    )
}

// ==========================================================================
// About
// ==========================================================================

fn about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let text = Text::new(ABOUT_TEXT)
        .size(typography::BODY)
        .line_height(1.6)
        .width(Length::Fill)
        .center();

    let body = fade_in(
        text,
        ctx.progress(BlockId::AboutText),
        ABOUT_TEXT_HEIGHT,
        false,
    );

    section_frame("About Us", body, palette::WHITE)
}

// ==========================================================================
// Contact
// ==========================================================================

fn contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let info = [
        ("Address", CONTACT_ADDRESS),
        ("Phone", CONTACT_PHONE),
        ("Email", CONTACT_EMAIL),
        ("Hours", CONTACT_HOURS),
    ]
    .into_iter()
    .fold(Column::new().spacing(spacing::MD), |column, (label, value)| {
        column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(label).size(typography::CAPTION).font(bold()))
                .push(Text::new(value).size(typography::BODY)),
        )
    });
    let info = fade_in(
        info,
        ctx.progress(BlockId::ContactInfo),
        CONTACT_INFO_HEIGHT,
        false,
    );

    let form = Column::new()
        .spacing(spacing::SM)
        .push(form_input("Your Name", Field::Name, ctx.contact))
        .push(form_input("Your Email", Field::Email, ctx.contact))
        .push(form_input("Phone (optional)", Field::Phone, ctx.contact))
        .push(form_input("Your Message", Field::Message, ctx.contact))
        .push(
            button(Text::new("Send Message").font(bold()))
                .on_press(Message::ContactSubmitted)
                .padding([spacing::SM, spacing::XL])
                .style(primary_button_style),
        );
    let form = fade_in(
        form,
        ctx.progress(BlockId::ContactForm),
        CONTACT_FORM_HEIGHT,
        false,
    );

    let body: Element<'a, Message> = if ctx.layout.contact_side_by_side() {
        Row::new()
            .spacing(GRID_GAP)
            .align_y(Vertical::Top)
            .push(Container::new(info).width(Length::FillPortion(1)))
            .push(Container::new(form).width(Length::FillPortion(1)))
            .into()
    } else {
        Column::new().spacing(GRID_GAP).push(info).push(form).into()
    };

    section_frame("Get In Touch", body, palette::GRAY_100)
}

fn form_input<'a>(placeholder: &'a str, field: Field, form: &ContactForm) -> Element<'a, Message> {
    text_input(placeholder, form.get(field))
        .on_input(move |value| Message::ContactFieldChanged(field, value))
        .on_submit(Message::ContactSubmitted)
        .padding(spacing::SM)
        .size(typography::BODY)
        .width(Length::Fill)
        .style(|theme: &Theme, status| {
            use iced::widget::text_input::{Status, Style};

            let extended = theme.extended_palette();
            let border_color = match status {
                Status::Focused { .. } => palette::BRAND_500,
                Status::Active | Status::Hovered | Status::Disabled => palette::GRAY_200,
            };
            Style {
                background: palette::WHITE.into(),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                icon: extended.background.weak.text,
                placeholder: palette::GRAY_700,
                value: palette::GRAY_900,
                selection: palette::BRAND_300,
            }
        })
        .into()
}

// ==========================================================================
// Shared building blocks
// ==========================================================================

/// Section with padding, a centered title, and `body` constrained to the
/// content width.
fn section_frame<'a>(
    title: &'a str,
    body: impl Into<Element<'a, Message>>,
    background: Color,
) -> Element<'a, Message> {
    let header = Container::new(Text::new(title).size(typography::TITLE_LG).font(bold()))
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_HEADER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top);

    let inner = Column::new()
        .width(Length::Fill)
        .max_width(MAX_CONTENT_WIDTH)
        .push(header)
        .push(body);

    Container::new(inner)
        .width(Length::Fill)
        .padding([SECTION_PADDING, SIDE_PADDING])
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            text_color: Some(palette::GRAY_900),
            ..Default::default()
        })
        .into()
}

/// Lays `cells` out in rows of `columns`, padding the last row so cells keep
/// the same width.
fn grid<'a>(cells: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(GRID_GAP);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut row = Row::new().spacing(GRID_GAP);
        for _ in 0..columns {
            row = match cells.next() {
                Some(cell) => row.push(Container::new(cell).width(Length::FillPortion(1))),
                None => row.push(Space::new().width(Length::FillPortion(1))),
            };
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Wraps a block in a fixed-height slot that slides up and fades in with
/// `progress`.
fn fade_in<'a>(
    content: impl Into<Element<'a, Message>>,
    progress: f32,
    height: f32,
    card: bool,
) -> Element<'a, Message> {
    let progress = progress.clamp(0.0, 1.0);
    let shift = (1.0 - progress) * FADE_SHIFT;

    let inner = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height - FADE_SHIFT.min(height)))
        .style(move |_theme: &Theme| fade_style(progress, card));

    let slot = Column::new()
        .push(Space::new().height(Length::Fixed(shift)))
        .push(inner);

    Container::new(slot)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}

fn fade_style(progress: f32, card: bool) -> container::Style {
    let alpha = |color: Color| Color {
        a: color.a * progress,
        ..color
    };

    if card {
        container::Style {
            background: Some(alpha(palette::WHITE).into()),
            text_color: Some(alpha(palette::GRAY_900)),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: alpha(shadow::CARD.color),
                ..shadow::CARD
            },
            ..Default::default()
        }
    } else {
        container::Style {
            text_color: Some(alpha(palette::GRAY_900)),
            ..Default::default()
        }
    }
}

fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_900,
        button::Status::Active => palette::BRAND_500,
        button::Status::Disabled => palette::GRAY_700,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}
