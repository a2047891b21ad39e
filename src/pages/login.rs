//! Login/register page driving the auth flow.
//!
//! The submit button is disabled while a request is in flight and
//! `begin_submit` refuses re-entry, so a double-click cannot issue two
//! requests. All auth failures land in the form's error slot as a single
//! user-facing message.

use leptos::prelude::*;

use crate::state::auth::{AuthFormState, AuthMode};
use crate::state::nav::NavState;

/// Two-mode auth form. Register success flips back to the login form with a
/// confirmation; login success persists the session and hands the profile
/// to the shell.
#[component]
pub fn LoginPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let form = RwSignal::new(AuthFormState::default());

    let submit = Callback::new(move |()| {
        let mut started = false;
        form.update(|f| started = f.begin_submit());
        if !started {
            return;
        }

        let snapshot = form.get_untracked();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match snapshot.mode {
                    AuthMode::Register => {
                        match crate::net::auth::register(&snapshot.email, &snapshot.password).await
                        {
                            Ok(()) => form.update(|f| f.register_succeeded()),
                            Err(e) => form.update(|f| f.submit_failed(&e.to_string())),
                        }
                    }
                    AuthMode::Login => {
                        match crate::net::auth::login(&snapshot.email, &snapshot.password).await {
                            Ok(success) => {
                                let mut store = crate::session::TokenStore::browser();
                                store.save(&success.token, &snapshot.email, &success.profile);
                                form.update(|f| f.login_succeeded());
                                crate::app::complete_login(nav, success.profile);
                            }
                            Err(e) => form.update(|f| f.submit_failed(&e.to_string())),
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (snapshot, nav);
        }
    });

    let is_register = move || form.get().mode == AuthMode::Register;

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <div class="auth-page__tabs">
                    <button
                        class="auth-page__tab"
                        class=("auth-page__tab--active", move || !is_register())
                        on:click=move |_| form.update(|f| f.set_mode(AuthMode::Login))
                    >
                        "Sign in"
                    </button>
                    <button
                        class="auth-page__tab"
                        class=("auth-page__tab--active", is_register)
                        on:click=move |_| form.update(|f| f.set_mode(AuthMode::Register))
                    >
                        "Create account"
                    </button>
                </div>

                {move || {
                    form.get()
                        .notice
                        .map(|msg| view! { <p class="auth-page__notice">{msg}</p> })
                }}
                {move || {
                    form.get()
                        .error
                        .map(|msg| view! { <p class="auth-page__error">{msg}</p> })
                }}

                <Show when=is_register>
                    // Shown in the form only; the register endpoint has no
                    // display-name field.
                    <label class="auth-page__label">
                        "Name"
                        <input
                            class="auth-page__input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| {
                                form.update(|f| f.name = event_target_value(&ev));
                            }
                        />
                    </label>
                </Show>

                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                </label>

                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| {
                            form.update(|f| f.password = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button
                    class="btn btn--primary auth-page__submit"
                    prop:disabled=move || form.get().loading
                    on:click=move |_| submit.run(())
                >
                    {move || {
                        match (form.get().loading, is_register()) {
                            (true, _) => "Please wait...",
                            (false, true) => "Create account",
                            (false, false) => "Sign in",
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
