//! Failure taxonomy for backend calls.

use thiserror::Error;

/// What went wrong with a backend request.
///
/// `Unauthenticated` is an expected outcome of the who-am-I check, not a
/// fault. `Transport` is kept distinct from `Unauthenticated` so callers
/// can tell "not logged in" from "backend unreachable"; the auth
/// initializer degrades both to "no user" but logs the transport case
/// instead of hiding an outage behind the login screen.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NetError {
    /// The session cookie is absent, expired, or rejected.
    #[error("not authenticated")]
    Unauthenticated,

    /// The backend refused the ephemeral session token.
    #[error("session exchange rejected")]
    ExchangeFailed,

    /// The requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// Any other non-2xx response on a data endpoint.
    #[error("request failed with status {0}")]
    Status(u16),

    /// Network-level failure: unreachable backend, aborted request,
    /// or an unparseable body.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl NetError {
    /// Stub error returned by API calls outside the browser build.
    pub fn server_side() -> Self {
        Self::Transport("not available on server".to_owned())
    }
}
