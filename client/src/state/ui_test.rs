use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_groups_by_column() {
    let state = UiState::default();
    assert_eq!(state.group_by, GroupBy::Column);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_has_no_filters_or_feedback() {
    let state = UiState::default();
    assert_eq!(state.filter.active_count(), 0);
    assert!(state.share_feedback.is_none());
}

// =============================================================
// Filters
// =============================================================

#[test]
fn toggle_priority_adds_then_removes() {
    let mut state = UiState::default();
    state.toggle_priority(Priority::High);
    assert_eq!(state.filter.priorities, vec![Priority::High]);
    state.toggle_priority(Priority::High);
    assert!(state.filter.priorities.is_empty());
}

#[test]
fn toggle_tag_and_clear() {
    let mut state = UiState::default();
    state.toggle_tag("tag-1");
    state.toggle_tag("tag-2");
    state.toggle_priority(Priority::Low);
    assert_eq!(state.filter.active_count(), 3);
    state.clear_filters();
    assert_eq!(state.filter.active_count(), 0);
}
