// SPDX-License-Identifier: MPL-2.0
//! Demo screen layout: a column of buttons with the toast overlay on top.

use super::demo::Demo;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::toast::Overlay;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &'a I18n, overlay: &'a Overlay) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD);

    let buttons = Demo::ALL.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(heading),
        |column, demo| column.push(demo_button(i18n, *demo)),
    );

    let content = Container::new(buttons)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);
    if let Some(toast) = overlay.view() {
        layers = layers.push(toast);
    }
    layers.into()
}

fn demo_button<'a>(i18n: &I18n, demo: Demo) -> Element<'a, Message> {
    let label = Container::new(Text::new(i18n.tr(demo.label_key())).size(typography::BODY))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    button(label)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding(spacing::XS)
        .style(styles::button_primary)
        .on_press(Message::Show(demo))
        .into()
}
