// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering the visible notifications.
//!
//! Toasts are small cards with a severity-colored accent border, a title,
//! a description and a close button. The region stacks them in one corner
//! of the window.

use super::content::ToastContent;
use super::Message;
use crate::config::ToastPosition;
use crate::queue::Toast as QueuedToast;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget rendering.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view(toast: &QueuedToast<ToastContent>) -> Element<'_, Message> {
        let content = toast.content();
        let accent_color = content.severity.color();

        let icon = Text::new(content.severity.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let title = Text::new(content.title.as_str())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let description = Text::new(content.description.as_str())
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(Color {
                    a: opacity::SECONDARY_TEXT,
                    ..theme.palette().text
                }),
            });

        let close_button = button(Text::new("✕").size(typography::BODY_SM))
            .on_press(Message::Close(toast.key()))
            .padding(spacing::XXS)
            .style(close_button_style);

        // Layout: [icon] [title / description] [close]
        let body = Column::new()
            .spacing(spacing::XXS)
            .push(title)
            .push(description);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(Container::new(body).width(Length::Fill))
            .push(close_button);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast region with every visible toast.
    ///
    /// Hovering the region pauses the auto-dismiss timers so a toast cannot
    /// disappear while the user is reading or reaching for it.
    pub fn view_region(
        toasts: &[QueuedToast<ToastContent>],
        position: ToastPosition,
    ) -> Element<'_, Message> {
        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (align_x, align_y) = region_alignment(position);
        let children: Vec<Element<'_, Message>> = toasts.iter().map(Self::view).collect();
        let column = Column::with_children(children)
            .spacing(spacing::XS)
            .align_x(align_x);

        let region = mouse_area(column)
            .on_enter(Message::PauseTimers)
            .on_exit(Message::ResumeTimers);

        Container::new(region)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }
}

/// Maps a configured corner to container alignment.
fn region_alignment(position: ToastPosition) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        ToastPosition::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        ToastPosition::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        ToastPosition::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        ToastPosition::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let (background, text_color, border) = match status {
        button::Status::Active => (None, base.text, iced::Border::default()),
        button::Status::Hovered => (overlay(opacity::OVERLAY_SUBTLE), base.text, rounded),
        button::Status::Pressed => (overlay(opacity::OVERLAY_MEDIUM), base.text, rounded),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            iced::Border::default(),
        ),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&Theme::Dark, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn close_button_only_highlights_on_interaction() {
        let active = close_button_style(&Theme::Light, button::Status::Active);
        let hovered = close_button_style(&Theme::Light, button::Status::Hovered);

        assert!(active.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn region_alignment_follows_position() {
        assert_eq!(
            region_alignment(ToastPosition::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
        assert_eq!(
            region_alignment(ToastPosition::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
    }
}
