//! Top navigation bar: brand, page links, and the session corner.

use leptos::prelude::*;

use crate::state::nav::{NavState, Page};

/// Navigation bar shown on every page. The session corner flips between the
/// signed-in email with a logout button and a sign-in button.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <header class="navbar">
            <button class="navbar__brand" on:click=move |_| crate::app::go_to(nav, Page::Home)>
                "DraftDeck"
            </button>

            <nav class="navbar__links">
                <button class="navbar__link" on:click=move |_| crate::app::go_to(nav, Page::Home)>
                    "Home"
                </button>
                <button class="navbar__link" on:click=move |_| crate::app::go_to(nav, Page::Dashboard)>
                    "Dashboard"
                </button>
            </nav>

            <div class="navbar__session">
                {move || match nav.get().current_user {
                    Some(user) => {
                        let email = user.email().unwrap_or("signed in").to_owned();
                        view! {
                            <div class="navbar__user">
                                <span class="navbar__email">{email}</span>
                                <button class="btn" on:click=move |_| crate::app::logout(nav)>
                                    "Log out"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! {
                        <button
                            class="btn btn--primary"
                            on:click=move |_| crate::app::go_to(nav, Page::Login)
                        >
                            "Sign in"
                        </button>
                    }
                        .into_any(),
                }}
            </div>
        </header>
    }
}
