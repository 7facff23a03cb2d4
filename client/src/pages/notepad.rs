//! Notepad page backed by the `data` query parameter.
//!
//! Every keystroke replaces the URL, so the address bar is always a
//! shareable copy of the text.

use dhek::NotepadState;
use dhek::notepad::NotepadStoreExt;
use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::state::store::provide_store;

#[component]
pub fn NotepadPage() -> impl IntoView {
    let notepad = provide_store::<NotepadState>();

    let name = {
        let notepad = notepad.clone();
        Signal::derive(move || notepad.with(|n| n.name.clone()))
    };
    let on_name_change = {
        let notepad = notepad.clone();
        Callback::new(move |next: String| notepad.store().set_name(next))
    };
    let share_url = {
        let notepad = notepad.clone();
        Callback::new(move |()| notepad.share_url())
    };
    let live = {
        let notepad = notepad.clone();
        move || notepad.is_live()
    };
    let chars = {
        let notepad = notepad.clone();
        move || notepad.with(|n| n.text.chars().count())
    };
    let text = {
        let notepad = notepad.clone();
        move || notepad.with(|n| n.text.clone())
    };

    view! {
        <PageHeader name=name on_name_change=on_name_change share_url=share_url narrow=true />
        <main id="main-content" class="notepad-page">
            <Show
                when=live
                fallback=|| view! { <div class="notepad-page__loading" aria-busy="true">"Loading notepad…"</div> }
            >
                <textarea
                    class="notepad-page__text"
                    aria-label="Notepad text"
                    placeholder="Start typing…"
                    spellcheck="true"
                    prop:value=text.clone()
                    on:input={
                        let notepad = notepad.clone();
                        move |ev| notepad.store().set_text(event_target_value(&ev))
                    }
                ></textarea>
                <p class="notepad-page__count">{let chars = chars.clone(); move || format!("{} characters", chars())}</p>
            </Show>
        </main>
    }
}
