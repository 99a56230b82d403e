// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::prediction::Classification;
use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::classification_color;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn tinted(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Raised surface for the main sections.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drop zone; highlighted while files hover over the window.
pub fn upload_area(drag_active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let (border_color, background) = if drag_active {
            (
                palette::PRIMARY_500,
                Some(Background::Color(tinted(palette::PRIMARY_500, opacity::TINT_STRONG))),
            )
        } else {
            (extended.background.strong.color, None)
        };

        container::Style {
            background,
            border: Border {
                color: border_color,
                width: if drag_active { 3.0 } else { 2.0 },
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Red banner for validation and request failures.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        background: Some(Background::Color(tinted(palette::ERROR_500, opacity::TINT))),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Result card tinted with the verdict color.
pub fn result_card(classification: Classification) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = classification_color(classification);
        container::Style {
            background: Some(Background::Color(tinted(accent, opacity::TINT))),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Unfilled part of the confidence bar.
pub fn confidence_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of the confidence bar, in the verdict color.
pub fn confidence_fill(classification: Classification) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(classification_color(classification))),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
