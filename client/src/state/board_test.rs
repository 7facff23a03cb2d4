#![cfg(not(feature = "hydrate"))]

use super::*;

use dhek::store::MemoryLocation;

fn live_store() -> UrlStore<BoardState> {
    let store = UrlStore::new(MemoryLocation::at("http://localhost:3000/board"));
    store.hydrate();
    store
}

// =============================================================
// Tasks
// =============================================================

#[test]
fn add_task_appends_to_column() {
    let store = live_store();
    let id = add_task(&store, "todo", "Write tests").expect("add");
    let board = store.snapshot();
    let task = board.task(&id).expect("task");
    assert_eq!(task.column_id, "todo");
    assert_eq!(task.priority, Priority::Medium);
    assert!(store.share_url().contains("board="));
}

#[test]
fn add_task_with_blank_title_writes_nothing() {
    let store = live_store();
    let before = store.snapshot();
    assert_eq!(add_task(&store, "todo", "   "), Err(DraftError::EmptyTitle));
    assert!(std::sync::Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn move_set_priority_and_delete() {
    let store = live_store();
    let id = add_task(&store, "todo", "a").expect("add");
    move_task(&store, &id, "done");
    set_priority(&store, &id, Priority::Urgent);
    let task = store.snapshot().task(&id).cloned().expect("task");
    assert_eq!(task.column_id, "done");
    assert_eq!(task.priority, Priority::Urgent);

    delete_task(&store, &id);
    assert!(store.snapshot().tasks.is_empty());
}

#[test]
fn unknown_task_edits_do_not_write() {
    let store = live_store();
    let before = store.snapshot();
    move_task(&store, "nope", "done");
    delete_task(&store, "nope");
    set_priority(&store, "nope", Priority::Low);
    toggle_subtask(&store, "nope", "s");
    assert!(std::sync::Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn toggle_subtask_flips_flag() {
    let store = live_store();
    let mut board = (*store.snapshot()).clone();
    let draft = TaskDraft {
        title: "parent".to_owned(),
        subtasks: vec![dhek::Subtask { id: "s1".to_owned(), title: "child".to_owned(), completed: false }],
        ..TaskDraft::default()
    };
    let id = board.upsert_task(draft, None, "").expect("create");
    store.replace(board);

    toggle_subtask(&store, &id, "s1");
    assert_eq!(store.snapshot().task(&id).expect("task").subtask_progress(), (1, 1));
}

// =============================================================
// Tags and members
// =============================================================

#[test]
fn create_tag_and_member_use_prefixed_ids() {
    let store = live_store();
    let tag = create_tag(&store, " bug ", TAG_COLORS[0].0).expect("tag");
    let member = create_member(&store, "Ada").expect("member");
    let board = store.snapshot();
    assert!(tag.starts_with("tag-"));
    assert!(member.starts_with("assignee-"));
    assert_eq!(board.tags[0].name, "bug");
    assert_eq!(board.team_members[0].name, "Ada");
}

#[test]
fn blank_tag_and_member_names_are_ignored() {
    let store = live_store();
    assert!(create_tag(&store, "  ", "#000000").is_none());
    assert!(create_member(&store, "").is_none());
    assert!(store.snapshot().tags.is_empty());
}

#[test]
fn toggle_task_tag_attaches_then_detaches_and_feeds_tag_grouping() {
    let store = live_store();
    let task_id = add_task(&store, "todo", "Fix login").expect("add");
    let tag_id = create_tag(&store, "bug", TAG_COLORS[0].0).expect("tag");

    toggle_task_tag(&store, &task_id, &tag_id);
    let board = store.snapshot();
    assert_eq!(board.task(&task_id).expect("task").tag_ids, vec![tag_id.clone()]);
    let groups = dhek::project::tag_columns(&board.tasks, &board.tags);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Bug");

    toggle_task_tag(&store, &task_id, &tag_id);
    assert!(store.snapshot().task(&task_id).expect("task").tag_ids.is_empty());
}

#[test]
fn toggle_task_assignee_keeps_other_fields() {
    let store = live_store();
    let task_id = add_task(&store, "done", "Ship").expect("add");
    set_priority(&store, &task_id, Priority::High);
    let before = store.snapshot().task(&task_id).cloned().expect("task");
    let member_id = create_member(&store, "Ada").expect("member");

    toggle_task_assignee(&store, &task_id, &member_id);
    let after = store.snapshot().task(&task_id).cloned().expect("task");
    assert_eq!(after.assignee_ids, vec![member_id]);
    assert_eq!(after.id, before.id);
    assert_eq!(after.column_id, "done");
    assert_eq!(after.priority, Priority::High);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn toggle_on_unknown_or_untitled_task_writes_nothing() {
    let store = live_store();
    let mut board = (*store.snapshot()).clone();
    board.tasks.push(dhek::Task { id: "legacy".to_owned(), ..dhek::Task::default() });
    store.replace(board);
    let before = store.snapshot();

    toggle_task_tag(&store, "nope", "t1");
    toggle_task_tag(&store, "legacy", "t1");
    assert!(std::sync::Arc::ptr_eq(&before, &store.snapshot()));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn commit_name_trims_and_rejects_blank() {
    assert_eq!(commit_name("  Sprint  ").as_deref(), Some("Sprint"));
    assert_eq!(commit_name("   "), None);
}

#[test]
fn now_iso_is_empty_off_browser() {
    assert!(now_iso().is_empty());
}
