// SPDX-License-Identifier: MPL-2.0
//! Shared styling for the views in [`crate::app`].
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`theming`] - Light/Dark/System theme mode and verdict colors

pub mod design_tokens;
pub mod styles;
pub mod theming;
