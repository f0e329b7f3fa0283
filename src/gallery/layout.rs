// SPDX-License-Identifier: MPL-2.0
//! Grid geometry and proximity detection.
//!
//! Tiles are laid out row-major in *rendered* order: only items that still
//! occupy a layout slot count, so hiding an item shifts every later tile.
//! Vertical placement depends only on the row, which is all the proximity
//! checks need.

use crate::domain::gallery::ItemId;
use iced::{Rectangle, Size};
use std::collections::BTreeSet;

/// Visible region of the scrollable gallery, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Distance scrolled from the top of the content.
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(offset_y: f32, width: f32, height: f32) -> Self {
        Self {
            offset_y: offset_y.max(0.0),
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.offset_y
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.offset_y + self.height
    }
}

/// Row-major tile grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    columns: u16,
    tile_height: f32,
    spacing: f32,
}

impl GridLayout {
    #[must_use]
    pub fn new(columns: u16, tile_height: f32, spacing: f32) -> Self {
        Self {
            columns: columns.max(1),
            tile_height: tile_height.max(1.0),
            spacing: spacing.max(0.0),
        }
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    #[must_use]
    pub fn tile_height(&self) -> f32 {
        self.tile_height
    }

    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Vertical distance between the tops of consecutive rows.
    fn row_pitch(&self) -> f32 {
        self.tile_height + self.spacing
    }

    /// Number of rows needed for `count` tiles.
    #[must_use]
    pub fn row_count(&self, count: usize) -> usize {
        count.div_ceil(usize::from(self.columns))
    }

    /// Total content height for `count` tiles.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn content_height(&self, count: usize) -> f32 {
        match self.row_count(count) {
            0 => 0.0,
            rows => rows as f32 * self.row_pitch() - self.spacing,
        }
    }

    /// Width of a single tile when the grid spans `content_width`.
    #[must_use]
    pub fn tile_width(&self, content_width: f32) -> f32 {
        let columns = f32::from(self.columns);
        ((content_width - self.spacing * (columns - 1.0)) / columns).max(0.0)
    }

    /// Bounds of the tile at rendered `position`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn tile_bounds(&self, position: usize, content_width: f32) -> Rectangle {
        let columns = usize::from(self.columns);
        let row = position / columns;
        let column = position % columns;
        let width = self.tile_width(content_width);
        Rectangle::new(
            iced::Point::new(
                column as f32 * (width + self.spacing),
                row as f32 * self.row_pitch(),
            ),
            Size::new(width, self.tile_height),
        )
    }

    /// Items whose tile overlaps the viewport grown by `margin` above and below.
    pub fn overlapping<'a>(
        &'a self,
        rendered: &'a [ItemId],
        viewport: Viewport,
        margin: f32,
    ) -> impl Iterator<Item = ItemId> + 'a {
        let top = viewport.top() - margin;
        let bottom = viewport.bottom() + margin;
        rendered
            .iter()
            .enumerate()
            .filter(move |(position, _)| {
                let bounds = self.tile_bounds(*position, viewport.width);
                bounds.y < bottom && bounds.y + bounds.height > top
            })
            .map(|(_, id)| *id)
    }

    /// Items whose tile starts above `viewport.bottom() + lookahead`.
    ///
    /// Tiles already scrolled past count as well.
    pub fn above_lookahead<'a>(
        &'a self,
        rendered: &'a [ItemId],
        viewport: Viewport,
        lookahead: f32,
    ) -> impl Iterator<Item = ItemId> + 'a {
        let limit = viewport.bottom() + lookahead;
        rendered
            .iter()
            .enumerate()
            .filter(move |(position, _)| self.tile_bounds(*position, viewport.width).y < limit)
            .map(|(_, id)| *id)
    }
}

/// One-shot proximity observer.
///
/// Each registered item fires at most once: the first time its tile comes
/// within `margin` of the viewport it is reported and unregistered.
#[derive(Debug, Clone, Default)]
pub struct ProximityObserver {
    margin: f32,
    registered: BTreeSet<ItemId>,
}

impl ProximityObserver {
    #[must_use]
    pub fn new(margin: f32) -> Self {
        Self {
            margin: margin.max(0.0),
            registered: BTreeSet::new(),
        }
    }

    pub fn observe(&mut self, id: ItemId) {
        self.registered.insert(id);
    }

    pub fn unobserve(&mut self, id: ItemId) {
        self.registered.remove(&id);
    }

    /// Reports registered items now intersecting and unregisters them.
    pub fn poll(
        &mut self,
        layout: &GridLayout,
        rendered: &[ItemId],
        viewport: Viewport,
    ) -> Vec<ItemId> {
        if self.registered.is_empty() {
            return Vec::new();
        }
        let fired: Vec<ItemId> = layout
            .overlapping(rendered, viewport, self.margin)
            .filter(|id| self.registered.contains(id))
            .collect();
        for id in &fired {
            self.registered.remove(id);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<usize>) -> Vec<ItemId> {
        range.map(ItemId::new).collect()
    }

    // 3 columns, 100px tiles, 10px gaps: rows start at 0, 110, 220, ...
    fn layout() -> GridLayout {
        GridLayout::new(3, 100.0, 10.0)
    }

    #[test]
    fn tiles_are_row_major() {
        let layout = layout();
        let first = layout.tile_bounds(0, 320.0);
        let fourth = layout.tile_bounds(3, 320.0);
        let fifth = layout.tile_bounds(4, 320.0);

        assert_eq!(first.y, 0.0);
        assert_eq!(first.width, 100.0);
        assert_eq!(fourth.x, 0.0);
        assert_eq!(fourth.y, 110.0);
        assert_eq!(fifth.x, 110.0);
    }

    #[test]
    fn content_height_accounts_for_gaps() {
        let layout = layout();
        assert_eq!(layout.content_height(0), 0.0);
        assert_eq!(layout.content_height(3), 100.0);
        assert_eq!(layout.content_height(4), 210.0);
    }

    #[test]
    fn overlapping_respects_margin() {
        let layout = layout();
        let rendered = ids(0..12); // rows at 0, 110, 220, 330
        let viewport = Viewport::new(0.0, 320.0, 150.0);

        let near: Vec<_> = layout.overlapping(&rendered, viewport, 0.0).collect();
        assert_eq!(near, ids(0..6));

        let near: Vec<_> = layout.overlapping(&rendered, viewport, 100.0).collect();
        assert_eq!(near, ids(0..9));
    }

    #[test]
    fn lookahead_includes_rows_scrolled_past() {
        let layout = layout();
        let rendered = ids(0..12);
        let viewport = Viewport::new(230.0, 320.0, 50.0);

        let swept: Vec<_> = layout.above_lookahead(&rendered, viewport, 0.0).collect();
        assert_eq!(swept, ids(0..9));
        let swept: Vec<_> = layout.above_lookahead(&rendered, viewport, 300.0).collect();
        assert_eq!(swept, ids(0..12));
    }

    #[test]
    fn rendered_order_drives_geometry() {
        let layout = layout();
        // Items 0..3 removed from layout: item 6 moves up to the second row.
        let rendered: Vec<_> = ids(3..12);
        let viewport = Viewport::new(0.0, 320.0, 150.0);
        let near: Vec<_> = layout.overlapping(&rendered, viewport, 0.0).collect();
        assert_eq!(near, ids(3..9));
    }

    #[test]
    fn observer_fires_once_per_item() {
        let layout = layout();
        let rendered = ids(0..6);
        let mut observer = ProximityObserver::new(0.0);
        for id in &rendered {
            observer.observe(*id);
        }

        let viewport = Viewport::new(0.0, 320.0, 50.0);
        assert_eq!(observer.poll(&layout, &rendered, viewport), ids(0..3));
        assert!(observer.poll(&layout, &rendered, viewport).is_empty());

        let scrolled = Viewport::new(120.0, 320.0, 50.0);
        assert_eq!(observer.poll(&layout, &rendered, scrolled), ids(3..6));
        let everything = Viewport::new(0.0, 320.0, 400.0);
        assert!(observer.poll(&layout, &rendered, everything).is_empty());
    }

    #[test]
    fn unobserved_items_never_fire() {
        let layout = layout();
        let rendered = ids(0..3);
        let mut observer = ProximityObserver::new(100.0);
        observer.observe(ItemId::new(1));
        observer.unobserve(ItemId::new(1));

        let fired = observer.poll(&layout, &rendered, Viewport::new(0.0, 320.0, 100.0));
        assert!(fired.is_empty());
    }

    #[test]
    fn zero_columns_is_treated_as_one() {
        let layout = GridLayout::new(0, 50.0, 0.0);
        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.tile_bounds(2, 200.0).y, 100.0);
    }
}
