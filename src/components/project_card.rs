//! Dashboard card for a single generated project.

use leptos::prelude::*;

use crate::net::api::export_url;
use crate::net::types::{DocType, ProjectOut};

/// One project in the dashboard grid, with a download link for the rendered
/// file.
#[component]
pub fn ProjectCard(project: ProjectOut) -> impl IntoView {
    let href = export_url(project.doc_type, project.id);
    let kind = match project.doc_type {
        DocType::Pptx => "Presentation",
        DocType::Docx => "Document",
    };

    view! {
        <article class="project-card">
            <span class="project-card__kind">{kind}</span>
            <h3 class="project-card__title">{project.title.clone()}</h3>
            <p class="project-card__topic">{project.topic.clone()}</p>
            {project
                .created_at
                .clone()
                .map(|ts| view! { <time class="project-card__time">{ts}</time> })}
            <a class="btn" href=href download>
                "Download"
            </a>
        </article>
    }
}
