// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are solid cards in the severity color, anchored to the top-right
//! corner. They slide in from the right while fading in, and leave the same way.

use super::notification::{Appearance, Notification};
use super::presenter::Presenter;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Font, Length, Padding, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at `now`.
    pub fn view<'a, Message: 'a>(
        notification: &'a Notification,
        now: Instant,
    ) -> Element<'a, Message> {
        let appearance = notification.appearance(now);
        let background = notification.severity().color();

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .font(Font {
                weight: Weight::Semibold,
                ..Font::DEFAULT
            });

        let card = Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::MD, spacing::XL])
            .style(move |_theme: &Theme| toast_container_style(background, appearance));

        // Slide by padding the card inside a clipped slot of the same width.
        let shift = appearance.offset.clamp(0.0, 1.0) * sizing::TOAST_WIDTH;
        let slot = Row::new()
            .push(Space::new().width(Length::Fixed(shift)))
            .push(card);

        Container::new(slot)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .clip(true)
            .into()
    }

    /// Renders the toast overlay with all attached notifications.
    ///
    /// Toasts share the top-right anchor and stack downward in insertion order.
    pub fn view_overlay<'a, Message: 'a>(
        presenter: &'a Presenter,
        now: Instant,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = presenter
            .elements()
            .map(|notification| Self::view(notification, now))
            .collect();

        if toasts.is_empty() {
            return Space::new()
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: sizing::TOAST_TOP,
                right: sizing::TOAST_RIGHT,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(
    background: Color,
    appearance: Appearance,
) -> iced::widget::container::Style {
    let alpha = appearance.opacity.clamp(0.0, 1.0);

    iced::widget::container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..background
        })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: Color {
                a: shadow::TOAST.color.a * alpha,
                ..shadow::TOAST.color
            },
            ..shadow::TOAST
        },
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_container_style_uses_severity_color() {
        let style = toast_container_style(Severity::Error.color(), Appearance::VISIBLE);

        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::ERROR_500))
        );
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn hidden_toast_is_fully_transparent() {
        let style = toast_container_style(Severity::Info.color(), Appearance::HIDDEN);

        match style.background {
            Some(iced::Background::Color(color)) => assert_eq!(color.a, 0.0),
            other => panic!("expected solid background, got {other:?}"),
        }
        assert_eq!(style.shadow.color.a, 0.0);
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let now = Instant::now();
        let mut presenter = Presenter::new();
        {
            let _empty: Element<'_, ()> = Toast::view_overlay(&presenter, now);
        }

        presenter.present("hello", Severity::Success, now);
        let _filled: Element<'_, ()> = Toast::view_overlay(&presenter, now);
    }
}
