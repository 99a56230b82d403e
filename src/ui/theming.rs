// SPDX-License-Identifier: MPL-2.0
//! Theme selection and the colors that depend on it.

use crate::domain::prediction::Classification;
use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The explicit mode the header toggle switches to.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// i18n key of the toggle label (names the mode it switches *to*).
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        if self.is_dark() {
            "header-theme-light"
        } else {
            "header-theme-dark"
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Accent color of a verdict.
#[must_use]
pub fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Synthetic => palette::SYNTHETIC_500,
        Classification::Real => palette::REAL_500,
    }
}
