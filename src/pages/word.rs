//! Document generator page.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::types::{DocType, ProjectCreate, ProjectOut};
use crate::state::nav::NavState;

/// Form that requests a generated `.docx` document and offers the rendered
/// file for download.
#[component]
pub fn WordPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let title = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let num_pages = RwSignal::new("3".to_owned());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let created = RwSignal::new(None::<ProjectOut>);

    let generate = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        if nav.get_untracked().current_user.is_none() {
            error.set(Some("Sign in to generate a document.".to_owned()));
            return;
        }
        if title.get_untracked().trim().is_empty() || topic.get_untracked().trim().is_empty() {
            error.set(Some("Title and topic are required.".to_owned()));
            return;
        }
        let Ok(pages) = num_pages.get_untracked().trim().parse::<u32>() else {
            error.set(Some("Page count must be a number.".to_owned()));
            return;
        };
        if !(1..=20).contains(&pages) {
            error.set(Some("Page count must be between 1 and 20.".to_owned()));
            return;
        }

        let request = ProjectCreate {
            title: title.get_untracked().trim().to_owned(),
            topic: topic.get_untracked().trim().to_owned(),
            doc_type: DocType::Docx,
            num_slides: None,
            num_pages: Some(pages),
        };
        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let token = crate::session::TokenStore::browser().token().unwrap_or_default();
                match crate::net::api::create_project(&request, &token).await {
                    Ok(project) => created.set(Some(project)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    view! {
        <div class="generator-page">
            <h1>"New document"</h1>

            {move || error.get().map(|msg| view! { <p class="generator-page__error">{msg}</p> })}

            <label class="generator-page__label">
                "Title"
                <input
                    class="generator-page__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="generator-page__label">
                "Topic"
                <input
                    class="generator-page__input"
                    type="text"
                    placeholder="What should the document cover?"
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
            </label>
            <label class="generator-page__label">
                "Pages"
                <input
                    class="generator-page__input generator-page__input--count"
                    type="number"
                    min="1"
                    max="20"
                    prop:value=move || num_pages.get()
                    on:input=move |ev| num_pages.set(event_target_value(&ev))
                />
            </label>

            <button
                class="btn btn--primary"
                prop:disabled=move || pending.get()
                on:click=move |_| generate.run(())
            >
                {move || if pending.get() { "Generating..." } else { "Generate document" }}
            </button>

            {move || {
                created
                    .get()
                    .map(|project| view! {
                        <section class="generator-page__result">
                            <h2>"Ready"</h2>
                            <ProjectCard project=project/>
                        </section>
                    })
            }}
        </div>
    }
}
