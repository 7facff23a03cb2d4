//! Page header with editable name, theme toggle and Share button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the board and notepad pages. The name commits on Enter or blur
//! (blank edits are discarded) and Escape cancels. Share copies the current
//! href, which already carries the encoded state.

use leptos::prelude::*;

use crate::state::board::commit_name;
use crate::state::ui::UiState;
use crate::util::dark_mode::{self, Theme};

/// Header bar for a URL-backed page.
#[component]
pub fn PageHeader(
    /// Name to display.
    name: Signal<String>,
    on_name_change: Callback<String>,
    /// Produces the URL to copy at click time.
    share_url: Callback<(), String>,
    #[prop(optional)] narrow: bool,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    let save = move || {
        if let Some(next) = commit_name(&draft.get_untracked()) {
            on_name_change.run(next);
        }
        editing.set(false);
    };

    let on_share = move |_| {
        let url = share_url.run(());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let method = crate::util::clipboard::copy_text(&url).await;
                ui.update(|u| u.share_feedback = Some(method));
                gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                ui.update(|u| u.share_feedback = None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    };

    view! {
        <header class="page-header">
            <div class="page-header__inner" class:page-header__inner--narrow=narrow>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <button
                                class="page-header__name"
                                type="button"
                                on:click=move |_| {
                                    draft.set(name.get_untracked());
                                    editing.set(true);
                                }
                            >
                                {move || name.get()}
                                <span class="page-header__pencil" aria-hidden="true">"✎"</span>
                            </button>
                        }
                    }
                >
                    <input
                        class="page-header__name-input"
                        aria-label="Page name"
                        autofocus
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:blur=move |_| save()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                save();
                            }
                            "Escape" => editing.set(false),
                            _ => {}
                        }
                    />
                </Show>

                <div class="page-header__actions">
                    <button
                        class="btn page-header__theme"
                        type="button"
                        aria-label=move || ui.get().theme.toggle_label()
                        on:click=move |_| {
                            let next = dark_mode::toggle(ui.get_untracked().theme);
                            ui.update(|u| u.theme = next);
                        }
                    >
                        {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
                    </button>
                    <button class="btn page-header__share" type="button" on:click=on_share>
                        {move || ui.get().share_feedback.map_or("Share", |m| m.label())}
                    </button>
                </div>
            </div>
        </header>
    }
}
