// SPDX-License-Identifier: MPL-2.0
//! Theme icons for toasts.
//!
//! Icons are SVG files from `assets/icons/` embedded at compile time via
//! `include_bytes!`. Handles are cached using `OnceLock` so every toast reuses
//! the same parsed data.

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    checkmark,
    "success.svg",
    "Checkmark icon: white tick on a green disc."
);
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: exclamation mark in an amber triangle."
);
define_icon!(
    cross,
    "error.svg",
    "Cross icon: white X on a red disc."
);

/// Resizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
