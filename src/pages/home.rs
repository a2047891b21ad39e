//! Landing page with the two create actions.

use leptos::prelude::*;

use crate::state::nav::{NavState, ProjectKind};

/// Home page — pitch plus shortcuts into the two generators.
#[component]
pub fn HomePage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"DraftDeck"</h1>
                <p>"Describe a topic, get a finished slide deck or document back."</p>
            </section>

            <section class="home-page__actions">
                <article class="home-page__action">
                    <h2>"Presentation"</h2>
                    <p>"A structured .pptx deck with generated slide content."</p>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| crate::app::create_project(nav, ProjectKind::Ppt)
                    >
                        "New presentation"
                    </button>
                </article>
                <article class="home-page__action">
                    <h2>"Document"</h2>
                    <p>"A sectioned .docx document written from your topic."</p>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| crate::app::create_project(nav, ProjectKind::Word)
                    >
                        "New document"
                    </button>
                </article>
            </section>
        </div>
    }
}
