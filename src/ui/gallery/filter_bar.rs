// SPDX-License-Identifier: MPL-2.0
//! Row of filter chips with the visible project count.

use crate::app::i18n::fluent::I18n;
use crate::gallery::{Message, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Returns `None` when the catalog declares no filter controls.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let controls = state.filter_controls()?;

    let chips = controls.iter().fold(
        Row::new().spacing(spacing::XS).align_y(alignment::Vertical::Center),
        |row, control| {
            let label = Text::new(format!("{} ({})", control.label, control.count))
                .size(typography::BODY);
            row.push(
                button(label)
                    .height(sizing::CHIP_HEIGHT)
                    .padding([spacing::XXS, spacing::MD])
                    .style(styles::button::filter_chip(control.pressed))
                    .on_press(Message::FilterSelected(control.tag.clone())),
            )
        },
    );

    let count = i18n.tr_with_args(
        "gallery-visible-count",
        &[("count", FluentValue::from(state.visible_count()))],
    );

    Some(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(chips)
            .push(Space::new().width(Length::Fill))
            .push(Text::new(count).size(typography::CAPTION))
            .into(),
    )
}
