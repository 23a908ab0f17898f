// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button used by the demo screen.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill, outline, lift) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_700, shadow::SM),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: WHITE,
        border: Border {
            color: outline,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: lift,
        snap: true,
    }
}
