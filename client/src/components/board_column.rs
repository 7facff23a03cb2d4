//! One board column: header, task cards and a quick-add input.

use dhek::project::GroupBy;
use dhek::{BoardState, Column, Task};
use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::state::board::add_task;
use crate::state::store::StoreBinding;

/// A column of task cards.
///
/// The quick-add input only appears when grouping by workflow column, since
/// priority and tag groups have no column to place a new task in.
#[component]
pub fn BoardColumn(column: Column, tasks: Vec<Task>, group_by: GroupBy) -> impl IntoView {
    let board = expect_context::<StoreBinding<BoardState>>();
    let draft = RwSignal::new(String::new());
    let count = tasks.len();
    let column_id = StoredValue::new(column.id.clone());

    let submit = move || {
        if add_task(board.store(), &column_id.get_value(), &draft.get_untracked()).is_ok() {
            draft.set(String::new());
        }
    };

    view! {
        <section class="board-column" data-column=column.id.clone()>
            <header class="board-column__header">
                <h2 class="board-column__title">{column.name.clone()}</h2>
                <span class="board-column__count">{count}</span>
            </header>
            <div class="board-column__tasks">
                {tasks
                    .into_iter()
                    .map(|task| view! { <TaskCard task=task group_by=group_by /> })
                    .collect::<Vec<_>>()}
            </div>
            {(group_by == GroupBy::Column)
                .then(|| {
                    view! {
                        <input
                            class="board-column__add"
                            placeholder="Add a task"
                            aria-label=format!("Add a task to {}", column.name)
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit();
                                }
                            }
                        />
                    }
                })}
        </section>
    }
}
