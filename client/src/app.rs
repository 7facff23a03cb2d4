//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{board::BoardPage, home::HomePage, notepad::NotepadPage};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Only UI chrome is provided here; each page owns its URL store so the
/// store lives exactly as long as the page that reads it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Theme preference is browser-only; apply it once mounted.
    Effect::new(move || {
        let theme = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dhek.css"/>
        <Title text="Kanban Board"/>
        <Meta name="description" content="A URL-encoded Kanban board - share your board via link"/>

        <a class="skip-link" href="#main-content">"Skip to content"</a>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("board") view=BoardPage/>
                <Route path=StaticSegment("notepad") view=NotepadPage/>
            </Routes>
        </Router>
    }
}
