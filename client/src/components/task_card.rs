//! Card for one task inside a board column.

use dhek::project::{self, GroupBy};
use dhek::{BoardState, Priority, Task};
use leptos::prelude::*;

use crate::state::board as actions;
use crate::state::store::StoreBinding;

/// A task card with inline move / priority / delete controls and tag and
/// assignee toggles.
///
/// Tag and assignee ids that no longer resolve are skipped.
#[component]
pub fn TaskCard(task: Task, group_by: GroupBy) -> impl IntoView {
    let board = expect_context::<StoreBinding<BoardState>>();
    let snapshot = board.get_untracked();

    let tags: Vec<_> = task
        .tag_ids
        .iter()
        .filter_map(|id| snapshot.tags.iter().find(|t| &t.id == id))
        .map(|t| (t.name.clone(), t.color.clone()))
        .collect();
    let assignees: Vec<String> = task
        .assignee_ids
        .iter()
        .filter_map(|id| snapshot.team_members.iter().find(|m| &m.id == id))
        .map(|m| m.name.clone())
        .collect();
    let (done, total) = task.subtask_progress();
    let due = task.due().map(project::format_date);
    let column_label = project::column_name(&task.column_id, &snapshot.columns).to_owned();
    let columns = snapshot.columns.clone();
    let tag_choices: Vec<_> = snapshot
        .tags
        .iter()
        .map(|t| (t.id.clone(), t.name.clone(), t.color.clone(), task.tag_ids.contains(&t.id)))
        .collect();
    let member_choices: Vec<_> = snapshot
        .team_members
        .iter()
        .map(|m| (m.id.clone(), m.name.clone(), task.assignee_ids.contains(&m.id)))
        .collect();
    let has_choices = !tag_choices.is_empty() || !member_choices.is_empty();

    let task_id = StoredValue::new(task.id.clone());
    let subtasks = task.subtasks.clone();
    let priority = task.priority;

    let on_move = {
        let board = board.clone();
        move |ev: leptos::ev::Event| {
            actions::move_task(board.store(), &task_id.get_value(), &event_target_value(&ev));
        }
    };
    let on_priority = {
        let board = board.clone();
        move |ev: leptos::ev::Event| {
            if let Some(p) = Priority::parse(&event_target_value(&ev)) {
                actions::set_priority(board.store(), &task_id.get_value(), p);
            }
        }
    };
    let on_delete = {
        let board = board.clone();
        move |_: leptos::ev::MouseEvent| actions::delete_task(board.store(), &task_id.get_value())
    };

    view! {
        <article class="task-card" data-priority=priority.as_str()>
            <header class="task-card__header">
                <h3 class="task-card__title">{task.title.clone()}</h3>
                <span class=format!("task-card__priority task-card__priority--{}", priority.as_str())>
                    {priority.label()}
                </span>
            </header>
            {(!task.description.is_empty())
                .then(|| view! { <p class="task-card__description">{task.description.clone()}</p> })}
            <ul class="task-card__tags">
                {tags
                    .into_iter()
                    .map(|(name, color)| {
                        view! {
                            <li class="task-card__tag" style=format!("--tag-color: {color}")>{name}</li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <ul class="task-card__subtasks">
                {subtasks
                    .into_iter()
                    .map(|subtask| {
                        let board = board.clone();
                        let subtask_id = subtask.id.clone();
                        view! {
                            <li>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=subtask.completed
                                        on:change=move |_| {
                                            actions::toggle_subtask(board.store(), &task_id.get_value(), &subtask_id);
                                        }
                                    />
                                    {subtask.title}
                                </label>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <footer class="task-card__meta">
                {(total > 0).then(|| view! { <span class="task-card__progress">{format!("{done}/{total}")}</span> })}
                {due.map(|d| view! { <span class="task-card__due">{d}</span> })}
                {(!assignees.is_empty())
                    .then(|| view! { <span class="task-card__assignees">{assignees.join(", ")}</span> })}
                {(group_by != GroupBy::Column)
                    .then(|| view! { <span class="task-card__status">{column_label}</span> })}
            </footer>
            {has_choices
                .then(|| {
                    let tag_board = board.clone();
                    let member_board = board.clone();
                    view! {
                        <details class="task-card__labels">
                            <summary>"Tags & people"</summary>
                            <div class="task-card__chips">
                                {tag_choices
                                    .into_iter()
                                    .map(|(id, name, color, active)| {
                                        let board = tag_board.clone();
                                        view! {
                                            <button
                                                class="chip"
                                                class:chip--active=active
                                                type="button"
                                                style=format!("--tag-color: {color}")
                                                aria-pressed=active.to_string()
                                                on:click=move |_| actions::toggle_task_tag(board.store(), &task_id.get_value(), &id)
                                            >
                                                {name}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="task-card__chips">
                                {member_choices
                                    .into_iter()
                                    .map(|(id, name, active)| {
                                        let board = member_board.clone();
                                        view! {
                                            <button
                                                class="chip"
                                                class:chip--active=active
                                                type="button"
                                                aria-pressed=active.to_string()
                                                on:click=move |_| {
                                                    actions::toggle_task_assignee(board.store(), &task_id.get_value(), &id);
                                                }
                                            >
                                                {name}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </details>
                    }
                })}
            <div class="task-card__actions">
                <select class="task-card__move" aria-label="Move to column" on:change=on_move>
                    {columns
                        .into_iter()
                        .map(|c| {
                            let selected = c.id == task.column_id;
                            view! { <option value=c.id selected=selected>{c.name}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <select class="task-card__set-priority" aria-label="Priority" on:change=on_priority>
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str() selected=p == priority>{p.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn task-card__delete" type="button" aria-label="Delete task" on:click=on_delete>
                    "✕"
                </button>
            </div>
        </article>
    }
}
