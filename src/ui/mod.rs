// SPDX-License-Identifier: MPL-2.0
//! Visual building blocks shared by the toast view and the demo screen.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG theme icons
//! - [`styles`] - Button styles for the demo screen

pub mod design_tokens;
pub mod icons;
pub mod styles;
