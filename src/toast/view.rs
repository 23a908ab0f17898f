// SPDX-License-Identifier: MPL-2.0
//! The text/icon element a toast displays.
//!
//! Each toast creates its own [`MessageView`]; views are never shared between
//! toasts.

use super::resources::{BackgroundStyle, Icon};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, text, Container, Row, Svg, Text};
use iced::{alignment, Color, Element, Theme};

/// Message text with an optional leading icon, styled by a toast theme.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    text: String,
    text_color: Color,
    leading_icon: Option<Icon>,
    icon_padding: f32,
    background: BackgroundStyle,
}

impl Default for MessageView {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_color: palette::WHITE,
            leading_icon: None,
            icon_padding: 0.0,
            background: BackgroundStyle::NONE,
        }
    }
}

impl MessageView {
    /// Creates a view that already shows `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn leading_icon(&self) -> Option<Icon> {
        self.leading_icon
    }

    pub fn icon_padding(&self) -> f32 {
        self.icon_padding
    }

    pub fn background(&self) -> BackgroundStyle {
        self.background
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Places `icon` before the text, `padding` pixels apart.
    pub fn set_leading_icon(&mut self, icon: Icon, padding: f32) {
        self.leading_icon = Some(icon);
        self.icon_padding = padding;
    }

    pub fn set_background(&mut self, background: BackgroundStyle) {
        self.background = background;
    }

    /// Renders the view: `[icon] message` inside a rounded, themed card.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let text_color = self.text_color;
        let message = Text::new(self.text.as_str())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });

        let mut content = Row::new()
            .spacing(self.icon_padding)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = self.leading_icon {
            content = content.push(icons::sized(icon.svg(), sizing::ICON_MD));
        }
        content = content.push(message);

        let background = self.background;
        Container::new(content)
            .padding([spacing::XS, spacing::MD])
            .style(move |_theme: &Theme| card_style(background))
            .into()
    }
}

impl Icon {
    fn svg<'a>(self) -> Svg<'a> {
        match self {
            Icon::Success => icons::checkmark(),
            Icon::Warning => icons::warning(),
            Icon::Error => icons::cross(),
        }
    }
}

fn card_style(background: BackgroundStyle) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background.fill)),
        border: iced::Border {
            color: background.border,
            width: background.border_width,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
