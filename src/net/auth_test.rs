use super::*;
use serde_json::json;

// =============================================================
// login response parsing
// =============================================================

#[test]
fn login_success_yields_token() {
    let body = r#"{"access_token": "tok123", "token_type": "bearer"}"#;
    assert_eq!(parse_login_response(200, body), Ok("tok123".to_owned()));
}

#[test]
fn login_success_without_token_is_malformed() {
    let body = r#"{"token_type": "bearer"}"#;
    assert_eq!(
        parse_login_response(200, body),
        Err(ApiError::Malformed("no token received".to_owned()))
    );
}

#[test]
fn login_success_with_unparseable_body_is_malformed() {
    assert!(matches!(
        parse_login_response(200, "<html>oops</html>"),
        Err(ApiError::Malformed(_))
    ));
}

#[test]
fn login_rejection_surfaces_backend_detail_verbatim() {
    let body = r#"{"detail": "LOGIN_BAD_CREDENTIALS"}"#;
    assert_eq!(
        parse_login_response(400, body),
        Err(ApiError::Rejected("LOGIN_BAD_CREDENTIALS".to_owned()))
    );
}

#[test]
fn login_rejection_without_detail_gets_generic_message() {
    assert_eq!(
        parse_login_response(500, ""),
        Err(ApiError::Rejected("request failed with status 500".to_owned()))
    );
}

// =============================================================
// register response parsing
// =============================================================

#[test]
fn register_success_ignores_body() {
    assert_eq!(parse_register_response(201, r#"{"id": 7}"#), Ok(()));
    assert_eq!(parse_register_response(201, "not json"), Ok(()));
}

#[test]
fn register_duplicate_surfaces_detail() {
    let body = r#"{"detail": "REGISTER_USER_ALREADY_EXISTS"}"#;
    assert_eq!(
        parse_register_response(400, body),
        Err(ApiError::Rejected("REGISTER_USER_ALREADY_EXISTS".to_owned()))
    );
}

#[test]
fn register_structured_detail_is_surfaced_as_json() {
    let body = r#"{"detail": [{"loc": ["body", "password"], "msg": "too short"}]}"#;
    match parse_register_response(422, body) {
        Err(ApiError::Rejected(msg)) => assert!(msg.contains("too short")),
        other => panic!("expected rejection, got {other:?}"),
    }
}

// =============================================================
// profile response parsing
// =============================================================

#[test]
fn profile_success_is_kept_opaque() {
    let body = r#"{"id": 1, "email": "u@x.com", "is_verified": false}"#;
    let profile = parse_profile_response(200, body).expect("profile");
    assert_eq!(profile.0, json!({"id": 1, "email": "u@x.com", "is_verified": false}));
    assert_eq!(profile.email(), Some("u@x.com"));
}

#[test]
fn profile_rejection_is_distinct_from_login_rejection() {
    let body = r#"{"detail": "Unauthorized"}"#;
    assert_eq!(
        parse_profile_response(401, body),
        Err(ApiError::Rejected("Unauthorized".to_owned()))
    );
}

// =============================================================
// register payload
// =============================================================

#[test]
fn register_payload_uses_fixed_account_flags() {
    let payload = serde_json::to_value(crate::net::types::RegisterRequest::new("u@x.com", "p1"))
        .expect("serialize");
    assert_eq!(
        payload,
        json!({
            "email": "u@x.com",
            "password": "p1",
            "is_active": true,
            "is_superuser": false,
            "is_verified": false,
        })
    );
}

// =============================================================
// token endpoint form body
// =============================================================

#[test]
fn login_form_body_carries_oauth2_filler_fields() {
    let body = login_form_body("u@x.com", "p1");
    assert!(body.contains("grant_type=password"));
    assert!(body.contains("username=u%40x.com"));
    assert!(body.contains("password=p1"));
    assert!(body.contains("scope="));
    assert!(body.contains("client_id="));
    assert!(body.contains("client_secret="));
}

#[test]
fn login_form_body_escapes_reserved_characters() {
    let body = login_form_body("a+b@x.com", "p&w=1");
    assert!(body.contains("username=a%2Bb%40x.com"));
    assert!(body.contains("password=p%26w%3D1"));
}
