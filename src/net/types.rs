//! Wire types shared with the backend.

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `GET /users/me`.
///
/// The profile is opaque to this layer: it is cached, compared, and handed
/// back to pages, never interpreted beyond the display accessors below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub serde_json::Value);

impl UserProfile {
    /// Email address for display, when the backend includes one.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email")?.as_str()
    }
}

/// Registration payload for `POST /auth/register`.
///
/// The account flags are fixed defaults required by the endpoint, never
/// user-controlled.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

impl<'a> RegisterRequest<'a> {
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self {
            email,
            password,
            is_active: true,
            is_superuser: false,
            is_verified: false,
        }
    }
}

/// OAuth2 password-grant form for `POST /auth/jwt/login`. The filler fields
/// are required by the token endpoint convention and always empty.
#[derive(Clone, Debug, Serialize)]
pub struct LoginForm<'a> {
    pub grant_type: &'static str,
    pub username: &'a str,
    pub password: &'a str,
    pub scope: &'static str,
    pub client_id: &'static str,
    pub client_secret: &'static str,
}

impl<'a> LoginForm<'a> {
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self {
            grant_type: "password",
            username: email,
            password,
            scope: "",
            client_id: "",
            client_secret: "",
        }
    }
}

/// Success body of the login endpoint. `access_token` stays optional so a
/// 2xx response without a token is detectable rather than a parse error.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}

/// Error body convention: `{"detail": ...}` where `detail` is usually a
/// string but may be structured (validation errors).
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

/// What kind of file a project renders to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocType {
    #[serde(rename = "pptx")]
    Pptx,
    #[serde(rename = "docx")]
    Docx,
}

/// Payload for creating a generation project.
#[derive(Clone, Debug, Serialize)]
pub struct ProjectCreate {
    pub title: String,
    pub topic: String,
    pub doc_type: DocType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_slides: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u32>,
}

/// A created or listed project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectOut {
    pub id: i64,
    pub title: String,
    pub topic: String,
    pub doc_type: DocType,
    #[serde(default)]
    pub created_at: Option<String>,
}
