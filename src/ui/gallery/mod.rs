// SPDX-License-Identifier: MPL-2.0
//! Views for the gallery widget.
//!
//! The widget renders as a filter bar above a scrollable tile grid. While
//! page scrolling is locked the lightbox is stacked on top of both; its
//! opaque layer keeps every mouse event, the wheel included, from reaching
//! the grid.
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │ [All] [uPVC] [Aluminium]  12 …  │  filter_bar
//! ├─────────────────────────────────┤
//! │ ┌─────┐ ┌─────┐ ┌─────┐         │
//! │ │tile │ │tile │ │tile │         │  grid (scrollable)
//! │ └─────┘ └─────┘ └─────┘         │
//! └─────────────────────────────────┘
//! ```

pub mod filter_bar;
pub mod grid;
pub mod lightbox;

use crate::app::i18n::fluent::I18n;
use crate::gallery::{Message, State, Viewport};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Stack, Text};
use iced::{Element, Length, Size};
use std::time::Instant;

/// iced's default line height, relative to the text size.
const LINE_HEIGHT: f32 = 1.3;

/// Renders the whole widget for the frame at `now`.
pub fn view<'a>(state: &'a State, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(title) = state.title() {
        page = page.push(Text::new(title).size(typography::TITLE_LG));
    }
    if let Some(bar) = filter_bar::view(state, i18n) {
        page = page.push(bar);
    }
    page = page.push(grid::view(state, i18n, now));

    if !state.page_scroll_enabled() {
        if let Some(overlay) = lightbox::view(state, i18n) {
            return Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(page)
                .push(overlay)
                .into();
        }
    }
    page.into()
}

/// Viewport of the grid's scrollable when the widget fills `window`.
///
/// Follows the page layout of [`view`]: padding around the page, then the
/// title and filter bar (when present) above the grid.
#[must_use]
pub fn grid_viewport(state: &State, window: Size, offset_y: f32) -> Viewport {
    let mut chrome = 2.0 * spacing::LG;
    if state.title().is_some() {
        chrome += typography::TITLE_LG * LINE_HEIGHT + spacing::MD;
    }
    if state.filter_controls().is_some() {
        chrome += sizing::CHIP_HEIGHT + spacing::MD;
    }
    Viewport::new(
        offset_y,
        window.width - 2.0 * spacing::LG,
        window.height - chrome,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::gallery::Settings;
    use std::path::Path;

    const ITEM: &str = "[[gallery.items]]\ncategory = \"upvc\"\nthumbnail = \"a.jpg\"\n";

    fn state(content: &str) -> State {
        let catalog = Catalog::parse(content, Path::new("/c")).expect("catalog");
        State::new(&catalog, Settings::default())
    }

    #[test]
    fn grid_viewport_excludes_page_padding() {
        let viewport = grid_viewport(&state(ITEM), Size::new(800.0, 600.0), 40.0);
        assert_eq!(viewport.offset_y, 40.0);
        assert_eq!(viewport.width, 800.0 - 2.0 * spacing::LG);
        assert_eq!(viewport.height, 600.0 - 2.0 * spacing::LG);
    }

    #[test]
    fn grid_viewport_excludes_title_and_filter_bar() {
        let content = format!(
            "[gallery]\ntitle = \"Projects\"\n\n[[gallery.filters]]\ntag = \"all\"\nlabel = \"All\"\n\n{ITEM}"
        );
        let bare = grid_viewport(&state(ITEM), Size::new(800.0, 600.0), 0.0);
        let full = grid_viewport(&state(&content), Size::new(800.0, 600.0), 0.0);

        let chrome = typography::TITLE_LG * LINE_HEIGHT + sizing::CHIP_HEIGHT + 2.0 * spacing::MD;
        assert!((bare.height - full.height - chrome).abs() < f32::EPSILON * 1000.0);
    }

    #[test]
    fn tiny_window_yields_empty_viewport() {
        let viewport = grid_viewport(&state(ITEM), Size::new(10.0, 10.0), 0.0);
        assert_eq!(viewport.height, 0.0);
        assert_eq!(viewport.width, 0.0);
    }
}
