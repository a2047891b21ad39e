//! HTTP layer: auth client, generic API client, wire types, and errors.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.

pub mod api;
pub mod auth;
pub mod error;
pub mod types;

/// Run a request future under the configured timeout.
#[cfg(feature = "hydrate")]
pub(crate) async fn with_timeout<T>(fut: impl std::future::Future<Output = T>) -> Result<T, error::ApiError> {
    use futures::FutureExt;

    let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(
        crate::config::REQUEST_TIMEOUT_MS,
    ));
    futures::select! {
        out = fut.fuse() => Ok(out),
        () = timeout.fuse() => Err(error::ApiError::Timeout),
    }
}
