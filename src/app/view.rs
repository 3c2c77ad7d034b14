// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base surface is a plain centered caption; the alert overlay is
//! stacked on top so banners float above whatever the application shows.

use super::{App, Message};
use crate::ui::alerts::Banner;
use crate::ui::design_tokens::{opacity, spacing, typography};
use iced::widget::{text, Column, Container, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the application view with the alert overlay on top.
pub fn view(app: &App) -> Element<'_, Message> {
    let heading = Text::new("Iced Alerts").size(typography::TITLE_MD);
    let hint = Text::new("Floating alerts fade out on their own; pinned ones wait for you.")
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::OVERLAY_STRONG,
                ..theme.palette().text
            }),
        });

    let base = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(heading)
            .push(hint),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let overlay = Banner::view_overlay(&app.alerts).map(Message::Alert);

    Stack::new().push(base).push(overlay).into()
}
