//! Backend endpoint configuration.
//!
//! One consistent base URL for the whole client: authentication endpoints
//! live unversioned at the root (`/auth/...`, `/users/me`, the fastapi-users
//! convention), everything else under the versioned API root.

/// Backend origin. Overridden at the reverse proxy in deployed builds.
pub const BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout applied to every auth/API call.
pub const REQUEST_TIMEOUT_MS: u64 = 15_000;

/// Join a path onto the unversioned auth base.
pub fn auth_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Join a path onto the versioned API root.
pub fn api_url(path: &str) -> String {
    format!("{BASE_URL}/api/v1{path}")
}
