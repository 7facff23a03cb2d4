//! Priority / tag filter toggles and the group-by selector.

use dhek::project::GroupBy;
use dhek::{BoardState, Priority};
use leptos::prelude::*;

use crate::state::store::StoreBinding;
use crate::state::ui::UiState;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let board = expect_context::<StoreBinding<BoardState>>();

    let active = move || ui.with(|u| u.filter.active_count());

    view! {
        <div class="filter-bar" role="toolbar" aria-label="Filters">
            <label class="filter-bar__group">
                "Group by "
                <select
                    aria-label="Group by"
                    on:change=move |ev| {
                        if let Some(g) = GroupBy::parse(&event_target_value(&ev)) {
                            ui.update(|u| u.group_by = g);
                        }
                    }
                >
                    {GroupBy::ALL
                        .into_iter()
                        .map(|g| {
                            view! {
                                <option value=g.as_str() selected=move || ui.with(|u| u.group_by == g)>
                                    {g.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <div class="filter-bar__priorities">
                {Priority::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <button
                                class="chip"
                                type="button"
                                class:chip--active=move || ui.with(|u| u.filter.priorities.contains(&p))
                                on:click=move |_| ui.update(|u| u.toggle_priority(p))
                            >
                                {p.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="filter-bar__tags">
                {move || {
                    board
                        .with(|b| b.tags.clone())
                        .into_iter()
                        .map(|tag| {
                            let id = StoredValue::new(tag.id);
                            view! {
                                <button
                                    class="chip"
                                    type="button"
                                    style=format!("--tag-color: {}", tag.color)
                                    class:chip--active=move || {
                                        ui.with(|u| id.with_value(|id| u.filter.tag_ids.contains(id)))
                                    }
                                    on:click=move |_| ui.update(|u| id.with_value(|id| u.toggle_tag(id)))
                                >
                                    {tag.name}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || { active() > 0 }>
                <button class="btn filter-bar__clear" type="button" on:click=move |_| ui.update(UiState::clear_filters)>
                    {move || format!("Clear filters ({})", active())}
                </button>
            </Show>
        </div>
    }
}
