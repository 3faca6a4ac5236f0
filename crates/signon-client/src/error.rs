//! Error taxonomy for identity operations.
//!
//! Only genuine transport failures are errors. A request the manager never
//! sent (missing credentials, no active session) and a server-side
//! rejection both surface as outcome variants, not as `Err` — see
//! [`crate::session::LoginOutcome`] and [`crate::session::LogoutOutcome`].

/// A failed HTTP exchange: the request never completed, came back with a
/// non-success status, or produced a body that could not be read as JSON.
///
/// State is never mutated on any of these; callers may retry the whole
/// operation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransportError {
    /// Network-level failure (connect, TLS, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{operation} failed with status {status}: {detail}")]
    Status {
        operation: &'static str,
        status: u16,
        detail: String,
    },

    /// The response body was not the JSON shape the operation requires.
    #[error("malformed {operation} response: {detail}")]
    Malformed {
        operation: &'static str,
        detail: String,
    },
}
