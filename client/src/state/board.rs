//! Board edit actions issued by the board page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each action reads the current snapshot, applies one edit to a copy, and
//! writes back the single top-level field it touched, so every edit is one
//! URL replacement and one notification.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use dhek::board::{BoardStoreExt, DraftError, TaskDraft, new_id};
use dhek::{Assignee, BoardState, Priority, Tag, UrlStore};

/// Colors offered for new tags.
pub const TAG_COLORS: [(&str, &str); 8] = [
    ("#ef4444", "Red"),
    ("#f97316", "Orange"),
    ("#eab308", "Yellow"),
    ("#22c55e", "Green"),
    ("#3b82f6", "Blue"),
    ("#8b5cf6", "Purple"),
    ("#ec4899", "Pink"),
    ("#6b7280", "Gray"),
];

/// Create a medium-priority task titled `title` in `column_id`.
///
/// # Errors
///
/// Returns [`DraftError::EmptyTitle`] for a blank title; nothing is written.
pub fn add_task(store: &UrlStore<BoardState>, column_id: &str, title: &str) -> Result<String, DraftError> {
    let draft = TaskDraft {
        title: title.to_owned(),
        column_id: column_id.to_owned(),
        priority: Priority::Medium,
        ..TaskDraft::default()
    };
    let mut next = (*store.snapshot()).clone();
    let id = next.upsert_task(draft, None, &now_iso())?;
    store.set_tasks(next.tasks);
    Ok(id)
}

/// Move a task to another column. Unknown tasks are ignored.
pub fn move_task(store: &UrlStore<BoardState>, task_id: &str, column_id: &str) {
    let mut next = (*store.snapshot()).clone();
    if next.move_task(task_id, column_id) {
        store.set_tasks(next.tasks);
    }
}

/// Delete a task. Unknown tasks are ignored.
pub fn delete_task(store: &UrlStore<BoardState>, task_id: &str) {
    let mut next = (*store.snapshot()).clone();
    if next.remove_task(task_id) {
        store.set_tasks(next.tasks);
    }
}

/// Change a task's priority.
pub fn set_priority(store: &UrlStore<BoardState>, task_id: &str, priority: Priority) {
    let mut next = (*store.snapshot()).clone();
    let Some(task) = next.tasks.iter_mut().find(|t| t.id == task_id) else {
        return;
    };
    task.priority = priority;
    store.set_tasks(next.tasks);
}

/// Flip one subtask's completion flag.
pub fn toggle_subtask(store: &UrlStore<BoardState>, task_id: &str, subtask_id: &str) {
    let mut next = (*store.snapshot()).clone();
    let Some(subtask) = next
        .tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .and_then(|t| t.subtasks.iter_mut().find(|s| s.id == subtask_id))
    else {
        return;
    };
    subtask.completed = !subtask.completed;
    store.set_tasks(next.tasks);
}

/// Attach `tag_id` to a task, or detach it if already attached.
pub fn toggle_task_tag(store: &UrlStore<BoardState>, task_id: &str, tag_id: &str) {
    edit_task(store, task_id, |draft| toggle_id(&mut draft.tag_ids, tag_id));
}

/// Assign a team member to a task, or unassign them if already assigned.
pub fn toggle_task_assignee(store: &UrlStore<BoardState>, task_id: &str, member_id: &str) {
    edit_task(store, task_id, |draft| toggle_id(&mut draft.assignee_ids, member_id));
}

/// Re-submit a task through the edit path with `f` applied to its fields.
/// Unknown tasks and edits rejected by [`DraftError`] write nothing.
fn edit_task(store: &UrlStore<BoardState>, task_id: &str, f: impl FnOnce(&mut TaskDraft)) {
    let mut next = (*store.snapshot()).clone();
    let Some(mut draft) = next.task(task_id).map(TaskDraft::from) else {
        return;
    };
    f(&mut draft);
    if next.upsert_task(draft, Some(task_id), &now_iso()).is_ok() {
        store.set_tasks(next.tasks);
    }
}

fn toggle_id(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|x| x == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_owned());
    }
}

/// Create a tag with a fresh id. Blank names are ignored.
pub fn create_tag(store: &UrlStore<BoardState>, name: &str, color: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let tag = Tag { id: new_id("tag"), name: name.to_owned(), color: color.to_owned() };
    let id = tag.id.clone();
    let mut next = (*store.snapshot()).clone();
    next.add_tag(tag);
    store.set_tags(next.tags);
    Some(id)
}

/// Create a team member with a fresh id. Blank names are ignored.
pub fn create_member(store: &UrlStore<BoardState>, name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let member = Assignee { id: new_id("assignee"), name: name.to_owned(), avatar: None };
    let id = member.id.clone();
    let mut next = (*store.snapshot()).clone();
    next.add_team_member(member);
    store.set_team_members(next.team_members);
    Some(id)
}

/// Trimmed board/page name, or `None` when the edit should be discarded.
pub fn commit_name(edited: &str) -> Option<String> {
    let trimmed = edited.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Current time as an ISO-8601 string (browser clock); empty off-browser.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
