//! Auth client: register, login, and profile fetch.
//!
//! Response handling is split into pure `(status, body)` parsers so the
//! endpoint contracts are testable natively; only the transport functions
//! below them touch the network and are gated behind `hydrate`.
//!
//! Login is a strict two-step flow: acquire a token from the token endpoint,
//! then fetch `GET /users/me` with it. The profile step is never issued
//! speculatively, and its failures are logged with the step name so they
//! stay distinguishable from a credential rejection.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::types::{ErrorBody, LoginForm, LoginResponse, UserProfile};

/// Outcome of a completed login: the bearer token and the profile fetched
/// with it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginSuccess {
    pub token: String,
    pub profile: UserProfile,
}

/// Extract the backend `detail` message from an error body, falling back to
/// a generic status line. Structured details (validation errors) are
/// surfaced as compact JSON.
pub fn detail_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);
    match detail {
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => format!("request failed with status {status}"),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a register response. The body of a success is ignored beyond
/// the status.
pub fn parse_register_response(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Rejected(detail_message(status, body)))
    }
}

/// Interpret a login response: a success must carry `access_token`; a 2xx
/// without one is a hard failure, never a silent default.
pub fn parse_login_response(status: u16, body: &str) -> Result<String, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected(detail_message(status, body)));
    }
    let parsed: LoginResponse = serde_json::from_str(body)
        .map_err(|_| ApiError::Malformed("login response was not valid JSON".to_owned()))?;
    parsed
        .access_token
        .ok_or_else(|| ApiError::Malformed("no token received".to_owned()))
}

/// Interpret a profile response.
pub fn parse_profile_response(status: u16, body: &str) -> Result<UserProfile, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected(detail_message(status, body)));
    }
    serde_json::from_str(body)
        .map_err(|_| ApiError::Malformed("profile response was not valid JSON".to_owned()))
}

/// Encode the OAuth2 password-grant body for the token endpoint.
pub fn login_form_body(email: &str, password: &str) -> String {
    // Encoding a struct of plain string fields cannot fail.
    serde_urlencoded::to_string(LoginForm::new(email, password)).unwrap_or_default()
}

/// Create an account via `POST /auth/register`.
///
/// The display name collected by the form is intentionally not sent: the
/// register endpoint has no display-name field.
///
/// # Errors
///
/// [`ApiError`] on network failure, timeout, or backend rejection.
pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::RegisterRequest;

        let req = gloo_net::http::Request::post(&crate::config::auth_url("/auth/register"))
            .json(&RegisterRequest::new(email, password))
            .map_err(|_| ApiError::Network)?;
        let resp = super::with_timeout(req.send())
            .await?
            .map_err(|_| ApiError::Network)?;
        let body = resp.text().await.unwrap_or_default();
        parse_register_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network)
    }
}

/// Exchange credentials for a bearer token, then fetch the profile with it.
///
/// # Errors
///
/// [`ApiError`] from either step; a credential rejection and a failed
/// profile follow-up both surface here, logged distinctly.
pub async fn login(email: &str, password: &str) -> Result<LoginSuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&crate::config::auth_url("/auth/jwt/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(email, password))
            .map_err(|_| ApiError::Network)?;
        let resp = super::with_timeout(req.send())
            .await?
            .map_err(|_| ApiError::Network)?;
        let body = resp.text().await.unwrap_or_default();
        let token = parse_login_response(resp.status(), &body)?;

        let profile = fetch_profile(&token).await.map_err(|e| {
            log::warn!("profile fetch after login failed: {e}");
            e
        })?;
        Ok(LoginSuccess { token, profile })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network)
    }
}

/// Fetch the authenticated profile via `GET /users/me`.
///
/// # Errors
///
/// [`ApiError`] on network failure, timeout, or rejection of the token.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::with_timeout(
            gloo_net::http::Request::get(&crate::config::auth_url("/users/me"))
                .header("Authorization", &format!("Bearer {token}"))
                .send(),
        )
        .await?
        .map_err(|_| ApiError::Network)?;
        let body = resp.text().await.unwrap_or_default();
        parse_profile_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}
