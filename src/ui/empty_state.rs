// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no catalog is loaded.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state with an "open catalog" button.
///
/// `error` is the last catalog load failure, if any.
pub fn view<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    error: Option<&'a str>,
    on_open: Message,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_600);

    let hint = Text::new(i18n.tr("empty-state-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_600);

    let open_button = button(Text::new(i18n.tr("empty-state-open-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(on_open);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint)
        .push(open_button);

    if let Some(error) = error {
        content = content.push(
            Text::new(i18n.tr_with_args(
                "empty-state-catalog-error",
                &[("error", FluentValue::from(error))],
            ))
            .size(typography::CAPTION)
            .color(palette::ERROR_500),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
