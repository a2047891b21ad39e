//! Root application shell: context provision, session restore, and page
//! switching.
//!
//! Navigation is a state machine, not URL routing: the shell holds the
//! active [`Page`] in a signal and swaps page components in place. Every
//! transition goes through the helpers below so the scroll-to-top contract
//! holds on all of them.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::net::types::UserProfile;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, ppt::PptPage, word::WordPage,
};
use crate::state::nav::{NavState, Page, ProjectKind};

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
/// Provides the navigation state context, restores the persisted session,
/// and renders the active page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    // Best-effort restore: a cached profile is accepted at face value; a
    // stale token surfaces later as a rejected API call.
    #[cfg(feature = "hydrate")]
    {
        if let Some(profile) = crate::session::TokenStore::browser().restore() {
            nav.update(|n| n.current_user = Some(profile));
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/draftdeck.css"/>
        <Title text="DraftDeck"/>

        <div class="app-shell">
            <Navbar/>
            <main class="app-shell__page">
                {move || match nav.get().page {
                    Page::Home => view! { <HomePage/> }.into_any(),
                    Page::Ppt => view! { <PptPage/> }.into_any(),
                    Page::Word => view! { <WordPage/> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage/> }.into_any(),
                    Page::Login => view! { <LoginPage/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Switch pages and scroll the viewport back to the top.
pub fn go_to(nav: RwSignal<NavState>, page: Page) {
    nav.update(|n| n.change_page(page));
    crate::util::scroll::to_top();
}

/// Open the generator page for a create intent.
pub fn create_project(nav: RwSignal<NavState>, kind: ProjectKind) {
    nav.update(|n| n.handle_create_project(kind));
    crate::util::scroll::to_top();
}

/// Adopt a freshly fetched profile after a successful login.
pub fn complete_login(nav: RwSignal<NavState>, profile: UserProfile) {
    nav.update(|n| n.handle_login(profile));
    crate::util::scroll::to_top();
}

/// End the session: clear the persisted entries, then reset the shell.
pub fn logout(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut store = crate::session::TokenStore::browser();
        store.clear();
    }
    nav.update(|n| n.handle_logout());
    crate::util::scroll::to_top();
}
