// SPDX-License-Identifier: MPL-2.0
//! Filter controller sub-component.
//!
//! Owns the single active filter tag and the pressed state and item count of
//! each filter control. Applying a tag computes which items match; the
//! orchestrator turns that into show/hide transitions.

use crate::catalog::FilterDefinition;
use crate::domain::gallery::{FilterTag, GalleryItem};

/// A filter button as rendered in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub tag: FilterTag,
    pub label: String,
    /// Only the control for the active tag is pressed.
    pub pressed: bool,
    /// Items this control's tag would show.
    pub count: usize,
}

/// Messages for the filter sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    Apply(FilterTag),
}

/// Result of applying a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Applied {
        tag: FilterTag,
        /// One flag per item, `true` when it should be visible.
        matches: Vec<bool>,
        visible: usize,
    },
}

#[derive(Debug, Clone)]
pub struct State {
    active: FilterTag,
    controls: Vec<FilterControl>,
}

impl State {
    /// Builds the controller from the catalog's filter controls.
    ///
    /// The active tag starts as `All`, so the `all` control (if any) is pressed.
    #[must_use]
    pub fn new(definitions: &[FilterDefinition], items: &[GalleryItem]) -> Self {
        let controls = definitions
            .iter()
            .map(|definition| FilterControl {
                tag: definition.tag.clone(),
                label: definition.label.clone(),
                pressed: false,
                count: 0,
            })
            .collect();
        let mut state = Self {
            active: FilterTag::All,
            controls,
        };
        state.refresh_controls(items);
        state
    }

    pub fn handle(&mut self, msg: Message, items: &[GalleryItem]) -> Effect {
        match msg {
            Message::Apply(tag) => {
                let matches: Vec<bool> = items
                    .iter()
                    .map(|item| tag.matches(&item.categories))
                    .collect();
                let visible = matches.iter().filter(|m| **m).count();
                self.active = tag.clone();
                self.refresh_controls(items);
                Effect::Applied {
                    tag,
                    matches,
                    visible,
                }
            }
        }
    }

    /// Recomputes pressed flags and per-control counts.
    fn refresh_controls(&mut self, items: &[GalleryItem]) {
        for control in &mut self.controls {
            control.pressed = control.tag == self.active;
            control.count = count_matching(&control.tag, items);
        }
    }

    #[must_use]
    pub fn active(&self) -> &FilterTag {
        &self.active
    }

    #[must_use]
    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }
}

/// Number of items `tag` would show.
#[must_use]
pub fn count_matching(tag: &FilterTag, items: &[GalleryItem]) -> usize {
    items
        .iter()
        .filter(|item| tag.matches(&item.categories))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{CategorySet, ItemId};
    use std::path::PathBuf;

    fn items(categories: &[&str]) -> Vec<GalleryItem> {
        categories
            .iter()
            .enumerate()
            .map(|(index, raw)| GalleryItem {
                id: ItemId::new(index),
                categories: CategorySet::parse(raw),
                thumbnail: PathBuf::from(format!("{index}.jpg")),
                full_image: None,
                title: String::new(),
                description: String::new(),
                badge: String::new(),
            })
            .collect()
    }

    fn definitions(tags: &[&str]) -> Vec<FilterDefinition> {
        tags.iter()
            .map(|tag| FilterDefinition {
                tag: FilterTag::parse(tag),
                label: tag.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn all_control_starts_pressed_with_counts() {
        let items = items(&["upvc", "aluminium", "residential upvc"]);
        let state = State::new(&definitions(&["all", "upvc", "blinds"]), &items);

        let controls = state.controls();
        assert!(controls[0].pressed);
        assert!(!controls[1].pressed);
        assert_eq!(
            controls.iter().map(|c| c.count).collect::<Vec<_>>(),
            vec![3, 2, 0]
        );
    }

    #[test]
    fn apply_marks_exactly_one_control_pressed() {
        let items = items(&["upvc", "aluminium"]);
        let mut state = State::new(&definitions(&["all", "upvc", "aluminium"]), &items);

        state.handle(Message::Apply(FilterTag::parse("aluminium")), &items);
        let pressed: Vec<bool> = state.controls().iter().map(|c| c.pressed).collect();
        assert_eq!(pressed, vec![false, false, true]);
        assert_eq!(state.active(), &FilterTag::parse("aluminium"));
    }

    #[test]
    fn apply_reports_matches_and_count() {
        let items = items(&["upvc", "aluminium", "residential upvc"]);
        let mut state = State::new(&definitions(&["all"]), &items);

        let Effect::Applied {
            matches, visible, ..
        } = state.handle(Message::Apply(FilterTag::parse("upvc")), &items);
        assert_eq!(matches, vec![true, false, true]);
        assert_eq!(visible, 2);
    }

    #[test]
    fn unknown_tag_matches_nothing_and_presses_nothing() {
        let items = items(&["upvc"]);
        let mut state = State::new(&definitions(&["all", "upvc"]), &items);

        let Effect::Applied { visible, .. } =
            state.handle(Message::Apply(FilterTag::parse("shutters")), &items);
        assert_eq!(visible, 0);
        assert!(state.controls().iter().all(|c| !c.pressed));
    }

    #[test]
    fn reapplying_same_tag_is_idempotent() {
        let items = items(&["upvc", "aluminium"]);
        let mut state = State::new(&definitions(&["all", "upvc"]), &items);

        let first = state.handle(Message::Apply(FilterTag::parse("upvc")), &items);
        let controls = state.controls().to_vec();
        let second = state.handle(Message::Apply(FilterTag::parse("upvc")), &items);

        assert_eq!(first, second);
        assert_eq!(state.controls(), controls.as_slice());
    }
}
