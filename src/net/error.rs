//! Request error taxonomy shared by the auth and API clients.

/// Why a backend request failed.
///
/// `Rejected` carries the backend's `detail` message verbatim; the other
/// variants cover failures where no backend detail exists.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("could not reach the server")]
    Network,

    /// The request exceeded the configured timeout.
    #[error("the request timed out")]
    Timeout,

    /// The backend answered with a non-success status.
    #[error("{0}")]
    Rejected(String),

    /// A success response was missing an expected field or unparseable.
    #[error("{0}")]
    Malformed(String),
}
