//! Session-identity client for the Signon API.
//!
//! [`SessionManager`] owns the current authenticated identity: it logs in
//! and out over HTTP, persists the session record across restarts through a
//! [`signon_core::store::KeyValueStore`], and broadcasts every state change
//! on a watch channel that late subscribers join at the latest value.

pub mod error;
pub mod session;
pub mod transport;

// Re-exports for convenient access
pub use error::TransportError;
pub use session::{LoginOutcome, LogoutOutcome, SessionManager, CURRENT_USER_KEY};
pub use transport::{HttpTransport, Transport};
