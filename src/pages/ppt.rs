//! Presentation generator page.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::types::{DocType, ProjectCreate, ProjectOut};
use crate::state::nav::NavState;

/// Form that requests a generated slide deck and offers the rendered file
/// for download.
#[component]
pub fn PptPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let title = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let num_slides = RwSignal::new("8".to_owned());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let created = RwSignal::new(None::<ProjectOut>);

    let generate = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        if nav.get_untracked().current_user.is_none() {
            error.set(Some("Sign in to generate a presentation.".to_owned()));
            return;
        }
        if title.get_untracked().trim().is_empty() || topic.get_untracked().trim().is_empty() {
            error.set(Some("Title and topic are required.".to_owned()));
            return;
        }
        let Ok(slides) = num_slides.get_untracked().trim().parse::<u32>() else {
            error.set(Some("Slide count must be a number.".to_owned()));
            return;
        };
        if !(2..=30).contains(&slides) {
            error.set(Some("Slide count must be between 2 and 30.".to_owned()));
            return;
        }

        let request = ProjectCreate {
            title: title.get_untracked().trim().to_owned(),
            topic: topic.get_untracked().trim().to_owned(),
            doc_type: DocType::Pptx,
            num_slides: Some(slides),
            num_pages: None,
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
            <h1>"New presentation"</h1>

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
                    placeholder="What should the deck explain?"
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
            </label>
            <label class="generator-page__label">
                "Slides"
                <input
                    class="generator-page__input generator-page__input--count"
                    type="number"
                    min="2"
                    max="30"
                    prop:value=move || num_slides.get()
                    on:input=move |ev| num_slides.set(event_target_value(&ev))
                />
            </label>

            <button
                class="btn btn--primary"
                prop:disabled=move || pending.get()
                on:click=move |_| generate.run(())
            >
                {move || if pending.get() { "Generating..." } else { "Generate deck" }}
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
