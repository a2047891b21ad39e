//! Dashboard page listing the user's generated projects.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::error::ApiError;
use crate::net::types::ProjectOut;
use crate::state::nav::{NavState, ProjectKind};

/// Load the project history with the stored bearer token.
async fn load_projects() -> Result<Vec<ProjectOut>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = crate::session::TokenStore::browser().token() else {
            return Err(ApiError::Rejected("You are not signed in.".to_owned()));
        };
        crate::net::api::fetch_projects(&token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Dashboard page — per-user project history plus the two create intents.
/// Signed-out visitors get a sign-in prompt instead of data; the page
/// itself is not guarded.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let projects = LocalResource::new(|| load_projects());

    let signed_in = move || nav.get().current_user.is_some();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your projects"</h1>
                <div class="dashboard-page__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| crate::app::create_project(nav, ProjectKind::Ppt)
                    >
                        "+ Presentation"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| crate::app::create_project(nav, ProjectKind::Word)
                    >
                        "+ Document"
                    </button>
                </div>
            </header>

            <Show
                when=signed_in
                fallback=move || {
                    view! {
                        <div class="dashboard-page__empty">
                            <p>"Sign in to see your project history."</p>
                            <button
                                class="btn"
                                on:click=move |_| crate::app::go_to(
                                    nav,
                                    crate::state::nav::Page::Login,
                                )
                            >
                                "Sign in"
                            </button>
                        </div>
                    }
                }
            >
                <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                    {move || {
                        projects
                            .get()
                            .map(|outcome| match outcome {
                                Ok(list) if list.is_empty() => {
                                    view! {
                                        <p class="dashboard-page__empty">
                                            "Nothing generated yet. Create your first project above."
                                        </p>
                                    }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="dashboard-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|p| view! { <ProjectCard project=p/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! {
                                        <p class="dashboard-page__error">{e.to_string()}</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </Show>
        </div>
    }
}
