use super::*;
use crate::net::auth::{parse_login_response, parse_profile_response, parse_register_response};
use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::session::{MemoryStore, TokenStore};
use crate::state::nav::{NavState, Page};
use serde_json::json;

fn filled_login_form() -> AuthFormState {
    AuthFormState {
        email: "u@x.com".to_owned(),
        password: "p1".to_owned(),
        ..AuthFormState::default()
    }
}

// =============================================================
// mode switching
// =============================================================

#[test]
fn starts_in_login_idle() {
    let form = AuthFormState::default();
    assert_eq!(form.mode, AuthMode::Login);
    assert!(!form.loading);
}

#[test]
fn mode_switch_keeps_fields_and_drops_messages() {
    let mut form = filled_login_form();
    form.error = Some("old error".to_owned());
    form.set_mode(AuthMode::Register);

    assert_eq!(form.mode, AuthMode::Register);
    assert_eq!(form.email, "u@x.com");
    assert!(form.error.is_none());
}

// =============================================================
// required-field policy
// =============================================================

#[test]
fn login_requires_email_and_password() {
    let mut form = AuthFormState::default();
    assert!(form.missing_required().is_some());
    form.email = "u@x.com".to_owned();
    assert!(form.missing_required().is_some());
    form.password = "p1".to_owned();
    assert!(form.missing_required().is_none());
}

#[test]
fn register_also_requires_a_name() {
    let mut form = filled_login_form();
    form.set_mode(AuthMode::Register);
    assert!(form.missing_required().is_some());
    form.name = "Uli".to_owned();
    assert!(form.missing_required().is_none());
}

#[test]
fn submit_with_missing_fields_shows_an_error_and_stays_idle() {
    let mut form = AuthFormState::default();
    assert!(!form.begin_submit());
    assert!(!form.loading);
    assert!(form.error.is_some());
}

// =============================================================
// double-submit guard
// =============================================================

#[test]
fn second_submit_while_pending_is_refused() {
    let mut form = filled_login_form();
    assert!(form.begin_submit());
    assert!(form.loading);

    // The first request is still in flight.
    assert!(!form.begin_submit());
    assert!(form.loading);
}

#[test]
fn submit_allowed_again_after_failure() {
    let mut form = filled_login_form();
    assert!(form.begin_submit());
    form.submit_failed("LOGIN_BAD_CREDENTIALS");

    form.password = "p2".to_owned();
    assert!(form.begin_submit());
}

// =============================================================
// failure handling
// =============================================================

#[test]
fn failure_keeps_fields_except_password() {
    let mut form = filled_login_form();
    form.begin_submit();
    form.submit_failed("LOGIN_BAD_CREDENTIALS");

    assert!(!form.loading);
    assert_eq!(form.error.as_deref(), Some("LOGIN_BAD_CREDENTIALS"));
    assert_eq!(form.email, "u@x.com");
    assert!(form.password.is_empty());
}

#[test]
fn register_success_returns_to_login_with_confirmation() {
    let mut form = filled_login_form();
    form.set_mode(AuthMode::Register);
    form.name = "Uli".to_owned();
    form.begin_submit();
    form.register_succeeded();

    assert_eq!(form.mode, AuthMode::Login);
    assert!(!form.loading);
    assert!(form.notice.is_some());
}

// =============================================================
// end-to-end login flow against canned backend responses
// =============================================================

#[test]
fn full_login_flow_populates_session_and_shell() {
    let mut store = TokenStore::new(MemoryStore::default());
    let mut nav = NavState::default();
    nav.change_page(Page::Login);
    let mut form = filled_login_form();

    // Register earlier in the scenario: succeeds, no session mutation.
    assert_eq!(parse_register_response(201, r#"{"id": 1}"#), Ok(()));
    assert!(store.restore().is_none());

    // Token endpoint, then the ordered profile follow-up.
    assert!(form.begin_submit());
    let token =
        parse_login_response(200, r#"{"access_token": "tok123"}"#).expect("token");
    let profile =
        parse_profile_response(200, r#"{"id": 1, "email": "u@x.com"}"#).expect("profile");

    store.save(&token, &form.email, &profile);
    form.login_succeeded();
    nav.handle_login(profile.clone());

    assert_eq!(store.email().as_deref(), Some("u@x.com"));
    assert_eq!(store.token().as_deref(), Some("tok123"));
    assert_eq!(store.restore(), Some(UserProfile(json!({"id": 1, "email": "u@x.com"}))));
    assert_eq!(nav.current_user, Some(profile));
    assert_eq!(nav.page, Page::Home);
    assert!(!form.loading);
}

#[test]
fn bad_credentials_leave_session_untouched() {
    let store = TokenStore::new(MemoryStore::default());
    let mut form = filled_login_form();

    assert!(form.begin_submit());
    let err = parse_login_response(400, r#"{"detail": "LOGIN_BAD_CREDENTIALS"}"#)
        .expect_err("rejection");
    assert_eq!(err, ApiError::Rejected("LOGIN_BAD_CREDENTIALS".to_owned()));
    form.submit_failed(&err.to_string());

    assert!(!form.loading);
    assert_eq!(form.error.as_deref(), Some("LOGIN_BAD_CREDENTIALS"));
    assert!(store.restore().is_none());
    assert!(store.token().is_none());
}

#[test]
fn token_missing_from_success_response_saves_nothing() {
    let store = TokenStore::new(MemoryStore::default());
    let mut form = filled_login_form();

    assert!(form.begin_submit());
    let err = parse_login_response(200, r#"{"token_type": "bearer"}"#).expect_err("malformed");
    assert_eq!(err, ApiError::Malformed("no token received".to_owned()));
    form.submit_failed(&err.to_string());

    // The flow never reached a save.
    assert!(store.token().is_none());
    assert!(store.restore().is_none());
}
