// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view: palette, spacing, sizing, type scale,
//! radii and shadows.
//!
//! ```
//! use synth_lens::ui::design_tokens::{palette, spacing};
//!
//! let gap = spacing::MD; // 16px
//! let accent = palette::SYNTHETIC_500;
//! assert!(gap > 0.0 && accent.r > accent.b);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.49, 0.53, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.4, 0.44, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.34, 0.82);

    // Verdict colors
    pub const SYNTHETIC_500: Color = Color::from_rgb(0.93, 0.33, 0.31);
    pub const REAL_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TINT: f32 = 0.12;
    pub const TINT_STRONG: f32 = 0.22;
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the centered content column.
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;

    /// Height of the drop zone when empty.
    pub const UPLOAD_AREA_HEIGHT: f32 = 260.0;

    /// Largest preview edge.
    pub const PREVIEW_MAX_HEIGHT: f32 = 320.0;

    pub const CONFIDENCE_BAR_HEIGHT: f32 = 10.0;

    pub const ICON_XL: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 32.0;
    pub const TITLE_LG: f32 = 24.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::BODY > typography::CAPTION);
    assert!(opacity::TINT < opacity::TINT_STRONG);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn verdict_colors_are_distinguishable() {
        assert!(palette::SYNTHETIC_500.r > palette::SYNTHETIC_500.g);
        assert!(palette::REAL_500.g > palette::REAL_500.r);
    }
}
