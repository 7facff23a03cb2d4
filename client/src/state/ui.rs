//! Local UI chrome state (theme, grouping, filters, share feedback).
//!
//! DESIGN
//! ======
//! Nothing here is encoded into the URL; reloading a share link resets it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use dhek::Priority;
use dhek::project::{FilterConfig, GroupBy};

use crate::util::clipboard::CopyMethod;
use crate::util::dark_mode::Theme;

/// UI state provided as `RwSignal<UiState>` context by the root component.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// What the board columns represent.
    pub group_by: GroupBy,
    pub filter: FilterConfig,
    /// Result of the last Share click, cleared after a short delay.
    pub share_feedback: Option<CopyMethod>,
}

impl UiState {
    /// Toggle `priority` in the active filter.
    pub fn toggle_priority(&mut self, priority: Priority) {
        toggle(&mut self.filter.priorities, priority);
    }

    /// Toggle `tag_id` in the active filter.
    pub fn toggle_tag(&mut self, tag_id: &str) {
        toggle(&mut self.filter.tag_ids, tag_id.to_owned());
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterConfig::default();
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|x| *x == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}
