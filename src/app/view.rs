// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::gallery;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{empty_state, gallery as gallery_view, styles};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: Option<&'a gallery::State>,
    pub catalog_error: Option<&'a str>,
    /// i18n key of the oldest undismissed warning.
    pub warning: Option<&'a str>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.gallery {
        Some(state) => gallery_view::view(state, ctx.i18n, ctx.now).map(Message::Gallery),
        None => empty_state::view(ctx.i18n, ctx.catalog_error, Message::OpenCatalogDialog),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }

    Container::new(column.push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn warning_banner<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("notification-dismiss")))
                .style(styles::button::primary)
                .on_press(Message::DismissWarning),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::warning_banner)
        .into()
}
