//! Kanban board page backed by the `board` query parameter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `UrlStore<BoardState>` for as long as it is mounted. Until
//! the store goes live the server and the first client render both show a
//! loading placeholder; afterwards columns are projected from the snapshot
//! and the local filter / grouping state.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use dhek::board::BoardStoreExt;
use dhek::project::{self, GroupBy};
use dhek::{BoardState, Column, Task};
use leptos::prelude::*;

use crate::components::board_column::BoardColumn;
use crate::components::filter_bar::FilterBar;
use crate::components::page_header::PageHeader;
use crate::state::board::{TAG_COLORS, create_member, create_tag};
use crate::state::store::{StoreBinding, provide_store};
use crate::state::ui::UiState;

/// Columns to render with their visible tasks, in display order.
pub(crate) fn board_groups(state: &BoardState, ui: &UiState) -> Vec<(Column, Vec<Task>)> {
    let visible = project::filter_tasks(&state.tasks, &ui.filter);
    project::display_columns(ui.group_by, &state.columns, &state.tasks, &state.tags)
        .into_iter()
        .map(|column| {
            let tasks = project::tasks_for_group(&visible, &column.id, ui.group_by)
                .into_iter()
                .cloned()
                .collect();
            (column, tasks)
        })
        .collect()
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let board = provide_store::<BoardState>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = {
        let board = board.clone();
        Signal::derive(move || board.with(|b| b.display_name().to_owned()))
    };
    let on_name_change = {
        let board = board.clone();
        Callback::new(move |next: String| board.store().set_name(next))
    };
    let share_url = {
        let board = board.clone();
        Callback::new(move |()| board.share_url())
    };
    let live = {
        let board = board.clone();
        move || board.is_live()
    };

    view! {
        <PageHeader name=name on_name_change=on_name_change share_url=share_url />
        <main id="main-content" class="board-page">
            <Show
                when=live
                fallback=|| view! { <div class="board-page__loading" aria-busy="true">"Loading board…"</div> }
            >
                <FilterBar />
                <div class="board-page__columns">
                    {
                        let board = board.clone();
                        move || {
                            let group_by = ui.with(|u| u.group_by);
                            let groups = ui.with(|u| board.with(|b| board_groups(b, u)));
                            if groups.is_empty() && group_by == GroupBy::Tag {
                                return view! { <p class="board-page__empty">"No tagged tasks yet."</p> }
                                    .into_any();
                            }
                            groups
                                .into_iter()
                                .map(|(column, tasks)| {
                                    view! { <BoardColumn column=column tasks=tasks group_by=group_by /> }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }
                </div>
                <BoardSettings />
            </Show>
        </main>
    }
}

/// Tag and team member creation.
#[component]
fn BoardSettings() -> impl IntoView {
    let board = expect_context::<StoreBinding<BoardState>>();
    let tag_name = RwSignal::new(String::new());
    let tag_color = RwSignal::new(TAG_COLORS[0].0.to_owned());
    let member_name = RwSignal::new(String::new());

    let on_add_tag = {
        let board = board.clone();
        move |_: leptos::ev::MouseEvent| {
            if create_tag(board.store(), &tag_name.get_untracked(), &tag_color.get_untracked()).is_some() {
                tag_name.set(String::new());
            }
        }
    };
    let on_add_member = move |_: leptos::ev::MouseEvent| {
        if create_member(board.store(), &member_name.get_untracked()).is_some() {
            member_name.set(String::new());
        }
    };

    view! {
        <section class="board-settings" aria-label="Tags and team">
            <div class="board-settings__row">
                <input
                    placeholder="New tag"
                    aria-label="Tag name"
                    prop:value=move || tag_name.get()
                    on:input=move |ev| tag_name.set(event_target_value(&ev))
                />
                <select aria-label="Tag color" on:change=move |ev| tag_color.set(event_target_value(&ev))>
                    {TAG_COLORS
                        .into_iter()
                        .map(|(hex, label)| view! { <option value=hex>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn" type="button" on:click=on_add_tag>"Add tag"</button>
            </div>
            <div class="board-settings__row">
                <input
                    placeholder="New team member"
                    aria-label="Team member name"
                    prop:value=move || member_name.get()
                    on:input=move |ev| member_name.set(event_target_value(&ev))
                />
                <button class="btn" type="button" on:click=on_add_member>"Add member"</button>
            </div>
        </section>
    }
}
