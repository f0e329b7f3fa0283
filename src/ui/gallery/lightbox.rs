// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │                                       [×] │
//! │        3 / 12                             │
//! │ [‹]  ┌──────────────┐ ┌────────────┐  [›] │
//! │      │    image     │ │ title      │      │
//! │      │              │ │ details    │      │
//! │      └──────────────┘ └────────────┘      │
//! └───────────────────────────────────────────┘
//! ```
//!
//! Clicking the dimmed backdrop closes the lightbox; clicks on the content
//! never reach it.

use crate::app::i18n::fluent::I18n;
use crate::gallery::subcomponents::lightbox::Display;
use crate::gallery::{LightboxView, Message, State, TileImage};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Returns `None` while the lightbox is closed or disabled.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let current = state.lightbox_view()?;

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropClicked);

    let previous = control("‹", i18n.tr("lightbox-previous"), Message::LightboxPrevious);
    let next = control("›", i18n.tr("lightbox-next"), Message::LightboxNext);

    let body = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(opaque(previous))
        .push(opaque(content(state, &current, i18n)))
        .push(opaque(next));

    let close = Container::new(opaque(
        button(Text::new("×").size(typography::TITLE_MD))
            .width(sizing::CLOSE_BUTTON)
            .height(sizing::CLOSE_BUTTON)
            .style(styles::button::lightbox_control)
            .on_press(Message::LightboxClose),
    ))
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(alignment::Horizontal::Right);

    let centered = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(opaque(backdrop))
            .push(centered)
            .push(close)
            .into(),
    )
}

fn content<'a>(
    state: &'a State,
    current: &LightboxView<'a>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let counter = Container::new(
        Text::new(i18n.tr_with_args(
            "lightbox-position",
            &[
                ("current", FluentValue::from(current.index + 1)),
                ("total", FluentValue::from(current.total)),
            ],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::counter);

    let stage = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::FillPortion(3))
        .push(counter)
        .push(picture(state, current));

    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(stage)
        .push(details(current, i18n))
        .into()
}

fn picture<'a>(state: &'a State, current: &LightboxView<'a>) -> Element<'a, Message> {
    let item = current.item;
    // The tile's image stands in until the high-resolution image arrives.
    let thumbnail = || match state.tile_source(item.id) {
        Some(TileImage::Decoded(data)) => data.handle.clone(),
        Some(TileImage::Thumbnail(path)) => image::Handle::from_path(path),
        None => image::Handle::from_path(&item.thumbnail),
    };

    let (handle, alpha) = match current.display {
        Display::HighRes(data) => (data.handle.clone(), opacity::OPAQUE),
        Display::Placeholder => (thumbnail(), opacity::PLACEHOLDER),
        Display::Fallback => (thumbnail(), opacity::OPAQUE),
    };

    image(handle)
        .content_fit(ContentFit::Contain)
        .opacity(alpha)
        .width(Length::Fill)
        .into()
}

fn details<'a>(current: &LightboxView<'a>, i18n: &'a I18n) -> Element<'a, Message> {
    let unknown = i18n.tr("lightbox-detail-unknown");
    let field = |key: &str, value: Option<&'static str>| {
        Row::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr(key)).size(typography::BODY))
            .push(
                Text::new(value.map_or_else(|| unknown.clone(), str::to_string))
                    .size(typography::BODY),
            )
    };

    let item = current.item;
    let column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(item.description.as_str()).size(typography::BODY))
        .push(field("lightbox-material", current.details.material))
        .push(field("lightbox-location", current.details.location))
        .push(field("lightbox-install-time", current.details.install_time));

    Container::new(column)
        .width(sizing::DETAILS_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::details_panel)
        .into()
}

fn control<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            button(
                Text::new(glyph)
                    .size(typography::TITLE_LG)
                    .align_x(alignment::Horizontal::Center),
            )
            .width(sizing::NAV_BUTTON)
            .height(sizing::NAV_BUTTON)
            .style(styles::button::lightbox_control)
            .on_press(message),
        )
        .push(Text::new(label).size(typography::CAPTION))
        .into()
}
