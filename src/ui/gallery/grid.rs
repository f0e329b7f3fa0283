// SPDX-License-Identifier: MPL-2.0
//! Scrollable tile grid.
//!
//! Tiles are laid out row-major from [`State::rendered`], which includes
//! items still fading out. The scrollable reports its viewport on every
//! scroll so the lazy loader can react.

use crate::app::i18n::fluent::I18n;
use crate::domain::gallery::{GalleryItem, ItemId};
use crate::gallery::{Message, State, TileImage, Viewport};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{self, Scrollable};
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::time::Instant;

pub fn view<'a>(state: &'a State, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    if state.shows_no_results() {
        return Container::new(Text::new(i18n.tr("gallery-no-results")).size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    }

    let layout = state.layout();
    let columns = usize::from(layout.columns());
    let rendered = state.rendered();

    let rows = rendered.chunks(columns).fold(
        Column::new().spacing(layout.spacing()).width(Length::Fill),
        |column, chunk| {
            let mut row = Row::new()
                .spacing(layout.spacing())
                .width(Length::Fill)
                .height(layout.tile_height());
            for id in chunk {
                row = row.push(tile(state, i18n, *id, now));
            }
            // Keep partial rows aligned with the full ones.
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            column.push(row)
        },
    );

    Scrollable::new(rows)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: scrollable::Viewport| {
            let bounds = viewport.bounds();
            Message::ViewportChanged(Viewport::new(
                viewport.absolute_offset().y,
                bounds.width,
                bounds.height,
            ))
        })
        .into()
}

fn tile<'a>(state: &'a State, i18n: &'a I18n, id: ItemId, now: Instant) -> Element<'a, Message> {
    let (Some(item), Some(source)) = (state.item(id), state.tile_source(id)) else {
        return Space::new().width(Length::FillPortion(1)).into();
    };
    let alpha = state.opacity(id, now);

    // The thumbnail stays up until the lazy load succeeds.
    let handle = match source {
        TileImage::Decoded(data) => data.handle.clone(),
        TileImage::Thumbnail(path) => image::Handle::from_path(path),
    };
    let picture = image(handle)
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover)
        .opacity(alpha);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture);
    if state.is_loading(id) {
        layers = layers.push(centered(
            Text::new(i18n.tr("gallery-tile-loading")).size(typography::CAPTION),
        ));
    }

    let card = Container::new(layers.push(caption(item, alpha)))
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::tile(alpha));

    let tile = button(card)
        .padding(0)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(styles::button::tile);

    // Fading tiles keep their slot but no longer react.
    let interactive = state.is_lightbox_enabled()
        && state.presence(id).is_some_and(|presence| presence.is_wanted());
    if interactive {
        tile.on_press(Message::OpenLightbox(id)).into()
    } else {
        tile.into()
    }
}

fn caption<'a>(item: &'a GalleryItem, alpha: f32) -> Element<'a, Message> {
    let badge = Container::new(Text::new(item.badge.as_str()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(alpha));

    Column::new()
        .padding(spacing::SM)
        .spacing(spacing::XXS)
        .height(Length::Fill)
        .push(badge)
        .push(Space::new().height(Length::Fill))
        .push(Text::new(item.title.as_str()).size(typography::BODY_LG))
        .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
