//! Generic API client for the versioned backend root.
//!
//! Thin request issuers that attach the caller's bearer token; generator and
//! dashboard pages build on these. The backend owns content generation and
//! file rendering, this side only moves JSON.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{DocType, ProjectCreate, ProjectOut};

/// URL segment a project's resource lives under.
pub fn doc_type_segment(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::Pptx => "presentations",
        DocType::Docx => "documents",
    }
}

/// Download URL for a project's rendered file.
pub fn export_url(doc_type: DocType, project_id: i64) -> String {
    crate::config::api_url(&format!("/{}/{project_id}/export", doc_type_segment(doc_type)))
}

/// `GET` a JSON resource under the API root.
///
/// # Errors
///
/// [`ApiError`] on network failure, timeout, rejection, or a body that does
/// not deserialize as `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&crate::config::api_url(path));
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = super::with_timeout(req.send())
            .await?
            .map_err(|_| ApiError::Network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Network)
    }
}

/// `POST` a JSON payload under the API root and read a JSON reply.
///
/// # Errors
///
/// Same conditions as [`get_json`].
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&crate::config::api_url(path));
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let req = req.json(body).map_err(|_| ApiError::Network)?;
        let resp = super::with_timeout(req.send())
            .await?
            .map_err(|_| ApiError::Network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, token);
        Err(ApiError::Network)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(ApiError::Rejected(super::auth::detail_message(status, &body)));
    }
    serde_json::from_str(&body)
        .map_err(|_| ApiError::Malformed("response body had an unexpected shape".to_owned()))
}

/// List the user's projects for the dashboard, newest first.
///
/// # Errors
///
/// [`ApiError`] if the list cannot be fetched.
pub async fn fetch_projects(token: &str) -> Result<Vec<ProjectOut>, ApiError> {
    get_json("/projects/", Some(token)).await
}

/// Create a generation project; the backend generates the initial content
/// before replying.
///
/// # Errors
///
/// [`ApiError`] if creation or generation fails.
pub async fn create_project(request: &ProjectCreate, token: &str) -> Result<ProjectOut, ApiError> {
    let path = format!("/{}/", doc_type_segment(request.doc_type));
    post_json(&path, request, Some(token)).await
}
