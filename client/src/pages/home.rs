//! Landing page linking to the two URL-backed tools.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main id="main-content" class="home-page">
            <h1 class="home-page__title">"Dhek"</h1>
            <p class="home-page__lede">
                "Everything lives in the link. Edit, then press Share to hand someone the whole thing."
            </p>
            <nav class="home-page__links">
                <a class="home-page__card" href="/board">
                    <h2>"Kanban board"</h2>
                    <p>"Columns, tasks, tags and assignees."</p>
                </a>
                <a class="home-page__card" href="/notepad">
                    <h2>"Notepad"</h2>
                    <p>"A single page of plain text."</p>
                </a>
            </nav>
        </main>
    }
}
