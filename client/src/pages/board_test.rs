use super::*;

use dhek::{Priority, Tag};

fn task(id: &str, column: &str, priority: Priority, tags: &[&str]) -> Task {
    Task {
        id: id.to_owned(),
        title: id.to_owned(),
        column_id: column.to_owned(),
        priority,
        tag_ids: tags.iter().map(|t| (*t).to_owned()).collect(),
        ..Task::default()
    }
}

fn sample_board() -> BoardState {
    BoardState {
        tasks: vec![
            task("a", "todo", Priority::Low, &["t1"]),
            task("b", "todo", Priority::Urgent, &[]),
            task("c", "done", Priority::High, &["t1", "t2"]),
            task("d", "ghost", Priority::Medium, &[]),
        ],
        tags: vec![
            Tag { id: "t1".into(), name: "bug".into(), color: "#ef4444".into() },
            Tag { id: "t2".into(), name: "ui".into(), color: "#3b82f6".into() },
            Tag { id: "t3".into(), name: "unused".into(), color: "#6b7280".into() },
        ],
        ..BoardState::default()
    }
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn column_grouping_follows_column_order_and_sorts_by_priority() {
    let groups = board_groups(&sample_board(), &UiState::default());
    let names: Vec<_> = groups.iter().map(|(c, _)| c.id.as_str()).collect();
    assert_eq!(names, ["backlog", "todo", "in-progress", "done"]);
    assert_eq!(ids(&groups[1].1), ["b", "a"]);
    assert_eq!(ids(&groups[3].1), ["c"]);
}

#[test]
fn tasks_in_unknown_columns_are_not_rendered() {
    let groups = board_groups(&sample_board(), &UiState::default());
    assert!(groups.iter().all(|(_, tasks)| tasks.iter().all(|t| t.id != "d")));
}

#[test]
fn tag_grouping_skips_unused_tags() {
    let ui = UiState { group_by: GroupBy::Tag, ..UiState::default() };
    let groups = board_groups(&sample_board(), &ui);
    let names: Vec<_> = groups.iter().map(|(c, _)| c.name.as_str()).collect();
    assert_eq!(names, ["Bug", "Ui"]);
    assert_eq!(ids(&groups[0].1), ["c", "a"]);
}

#[test]
fn priority_grouping_has_four_groups() {
    let ui = UiState { group_by: GroupBy::Priority, ..UiState::default() };
    let groups = board_groups(&sample_board(), &ui);
    assert_eq!(groups.len(), 4);
    assert_eq!(ids(&groups[0].1), ["b"]);
    assert_eq!(ids(&groups[2].1), ["d"]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filters_apply_before_grouping() {
    let mut ui = UiState::default();
    ui.toggle_tag("t1");
    let groups = board_groups(&sample_board(), &ui);
    let visible: usize = groups.iter().map(|(_, tasks)| tasks.len()).sum();
    assert_eq!(visible, 2);
    assert_eq!(ids(&groups[1].1), ["a"]);
}
