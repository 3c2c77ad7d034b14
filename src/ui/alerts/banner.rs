// SPDX-License-Identifier: MPL-2.0
//! Banner widget for rendering individual alerts.
//!
//! Banners are the visual representation of alerts, appearing as small cards
//! with severity-colored accents and a dismiss button. The banner's opacity
//! is a pure function of the alert's phase and the shared fade duration, so
//! the rendered transition always finishes exactly when the lifecycle
//! scheduler detaches the alert.

use super::alert::{Alert, Severity};
use super::fader::{Manager, Message, Phase};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Banner widget configuration.
pub struct Banner;

impl Banner {
    /// Renders a single alert banner.
    pub fn view(alert: &Alert, phase: Phase, fade: Duration) -> Element<'_, Message> {
        let alpha = phase_alpha(phase, fade, Instant::now());
        let accent = alert.severity().color();

        // Severity glyph with the accent color
        let glyph = Text::new(Self::severity_glyph(alert.severity()))
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(accent, alpha)),
            });

        // Message text
        let message_widget = Text::new(alert.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, alpha)),
            });

        // Dismiss button (always visible, uses main text color for good contrast)
        let alert_id = alert.id();
        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(alert_id))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        // Banner card with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::BANNER_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| banner_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the overlay with all attached alerts.
    ///
    /// Positions banners in the bottom-right corner, stacked vertically.
    /// Pending and leaving alerts still occupy their slot; only detachment
    /// collapses the stack.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let fade = manager.timings().fade;
        let banners: Vec<Element<'_, Message>> = manager
            .iter()
            .map(|(alert, phase)| Self::view(alert, phase, fade))
            .collect();

        if banners.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let banner_column = Column::with_children(banners)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(banner_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the glyph for the severity level.
    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning => "!",
            Severity::Error => "✕",
        }
    }
}

/// Scales a color's alpha channel by the banner opacity.
fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Cubic ease-out over `t` in `[0, 1]`.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Opacity of an entering banner, `elapsed` after its marker was applied.
fn fade_in_alpha(elapsed: Duration, fade: Duration) -> f32 {
    if fade.is_zero() {
        return opacity::OPAQUE;
    }
    ease_out(elapsed.as_secs_f32() / fade.as_secs_f32())
}

/// Opacity of a leaving banner, `elapsed` after its marker was removed.
fn fade_out_alpha(elapsed: Duration, fade: Duration) -> f32 {
    if fade.is_zero() {
        return opacity::TRANSPARENT;
    }
    opacity::OPAQUE - ease_out(elapsed.as_secs_f32() / fade.as_secs_f32())
}

/// Banner opacity for the given phase at instant `now`.
fn phase_alpha(phase: Phase, fade: Duration, now: Instant) -> f32 {
    match phase {
        Phase::Pending => opacity::TRANSPARENT,
        Phase::Visible { since } => fade_in_alpha(now.saturating_duration_since(since), fade),
        Phase::Leaving { since } => fade_out_alpha(now.saturating_duration_since(since), fade),
    }
}

/// Style function for the banner card.
fn banner_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let surface = Color {
        a: opacity::SURFACE,
        ..bg_color
    };

    container::Style {
        background: Some(iced::Background::Color(faded(surface, alpha))),
        border: iced::Border {
            color: faded(accent_color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = faded(base.text, alpha);

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..crate::ui::design_tokens::palette::GRAY_400
                },
                alpha,
            ))),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..crate::ui::design_tokens::palette::GRAY_400
                },
                alpha,
            ))),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn fade_in_starts_transparent_and_ends_opaque() {
        let fade = Duration::from_millis(500);
        assert!(fade_in_alpha(Duration::ZERO, fade).abs() < EPSILON);
        assert!((fade_in_alpha(fade, fade) - opacity::OPAQUE).abs() < EPSILON);
    }

    #[test]
    fn fade_out_starts_opaque_and_ends_transparent() {
        let fade = Duration::from_millis(500);
        assert!((fade_out_alpha(Duration::ZERO, fade) - opacity::OPAQUE).abs() < EPSILON);
        assert!(fade_out_alpha(fade, fade).abs() < EPSILON);
    }

    #[test]
    fn alpha_is_clamped_beyond_the_fade_duration() {
        let fade = Duration::from_millis(500);
        let long_after = Duration::from_secs(10);
        assert!((fade_in_alpha(long_after, fade) - opacity::OPAQUE).abs() < EPSILON);
        assert!(fade_out_alpha(long_after, fade).abs() < EPSILON);
    }

    #[test]
    fn zero_fade_duration_snaps_to_the_end_state() {
        assert_eq!(fade_in_alpha(Duration::ZERO, Duration::ZERO), opacity::OPAQUE);
        assert_eq!(
            fade_out_alpha(Duration::ZERO, Duration::ZERO),
            opacity::TRANSPARENT
        );
    }

    #[test]
    fn pending_phase_renders_transparent() {
        let alpha = phase_alpha(Phase::Pending, Duration::from_millis(500), Instant::now());
        assert_eq!(alpha, opacity::TRANSPARENT);
    }

    #[test]
    fn ease_out_is_monotonic() {
        let mut last = ease_out(0.0);
        for step in 1..=10 {
            let next = ease_out(step as f32 / 10.0);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn banner_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = banner_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn banner_container_style_fades_with_alpha() {
        let theme = Theme::Dark;
        let accent = palette::ERROR_500;
        let style = banner_container_style(&theme, accent, 0.5);

        assert!((style.border.color.a - 0.5).abs() < EPSILON);
    }

    #[test]
    fn severity_glyphs_are_distinct() {
        let glyphs = [
            Banner::severity_glyph(Severity::Success),
            Banner::severity_glyph(Severity::Info),
            Banner::severity_glyph(Severity::Warning),
            Banner::severity_glyph(Severity::Error),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in glyphs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
