//! The session manager — owns the current authenticated identity.
//!
//! State lives in a `tokio::sync::watch` channel: `current_session_value`
//! reads the latest value, `subscribe` hands out receivers that observe it
//! immediately and then every change. The persistent store always holds the
//! serialized form of whatever the channel holds.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use signon_core::config::Config;
use signon_core::store::KeyValueStore;
use signon_core::types::{LoginRequest, LogoutRequest, LogoutResponse, SessionRecord};

use crate::error::TransportError;
use crate::transport::Transport;

/// Store key under which the serialized session record lives.
pub const CURRENT_USER_KEY: &str = "currentUser";

// ─────────────────────────────────────────────
// Operation outcomes
// ─────────────────────────────────────────────

/// Decision reached by a login attempt.
///
/// `Skipped` means the request was never sent — callers must not read it as
/// success.
#[derive(Clone, Debug)]
pub enum LoginOutcome {
    /// Credentials accepted. The session is active, persisted, and emitted.
    LoggedIn(SessionRecord),
    /// The server answered without a login token. The raw body is kept for
    /// inspection; no state changed.
    Rejected(serde_json::Value),
    /// Missing user id or route type; no request was made.
    Skipped,
}

impl LoginOutcome {
    /// The new session record, if login succeeded.
    pub fn record(&self) -> Option<&SessionRecord> {
        match self {
            LoginOutcome::LoggedIn(record) => Some(record),
            _ => None,
        }
    }
}

/// Decision reached by a logout attempt.
#[derive(Clone, Debug)]
pub enum LogoutOutcome {
    /// The server confirmed; the session is gone from memory and store.
    LoggedOut(LogoutResponse),
    /// The server flagged an error; the session is untouched.
    Rejected(LogoutResponse),
    /// No active session; no request was made.
    Skipped,
}

// ─────────────────────────────────────────────
// SessionManager
// ─────────────────────────────────────────────

/// Owns the current authenticated identity.
///
/// Construction reads the store once; afterwards the manager is the sole
/// writer of the store's `currentUser` entry. Operations are single-shot:
/// the HTTP call is the only await point, and no state changes until it
/// resolves. Racing calls are last-write-wins, as the watch channel gives.
pub struct SessionManager {
    transport: Arc<dyn Transport>,
    store: Arc<dyn KeyValueStore>,
    rest_api_key: String,
    login_url: String,
    logout_url: String,
    current: watch::Sender<Option<SessionRecord>>,
}

impl SessionManager {
    /// Create a manager, restoring any persisted session.
    ///
    /// An absent or unreadable store entry, or one with an empty token,
    /// starts the manager logged out.
    pub fn new(
        config: &Config,
        transport: Arc<dyn Transport>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let initial = store
            .get(CURRENT_USER_KEY)
            .and_then(|raw| match serde_json::from_str::<SessionRecord>(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Ignoring unreadable persisted session: {}", e);
                    None
                }
            })
            .filter(SessionRecord::has_token);

        if let Some(record) = &initial {
            debug!(user_id = %record.user_id, "Restored persisted session");
        }

        let (current, _) = watch::channel(initial);

        SessionManager {
            transport,
            store,
            rest_api_key: config.api.rest_api_key.clone(),
            login_url: endpoint_url(config, &config.endpoints.user.login),
            logout_url: endpoint_url(config, &config.endpoints.user.logout),
            current,
        }
    }

    /// The current session, if any. Synchronous, no side effects.
    pub fn current_session_value(&self) -> Option<SessionRecord> {
        self.current.borrow().clone()
    }

    /// Observe the session state.
    ///
    /// The receiver sees the current value immediately (`borrow`) and every
    /// subsequent change (`changed`). Only the latest value is retained —
    /// a late subscriber never replays history.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionRecord>> {
        self.current.subscribe()
    }

    /// Log in as `user_id` via the given identity-provider route.
    ///
    /// Returns `Skipped` without touching the network when `user_id` or
    /// `route_type` is empty. A response carrying a non-empty `loginToken`
    /// becomes the new persisted session; one without is `Rejected` with
    /// the raw body so callers can inspect the reason.
    pub async fn login(
        &self,
        user_id: &str,
        password: &str,
        route_type: &str,
    ) -> Result<LoginOutcome, TransportError> {
        if user_id.is_empty() || route_type.is_empty() {
            debug!("Login skipped: user id or route type missing");
            return Ok(LoginOutcome::Skipped);
        }

        let request = LoginRequest {
            rest_api_key: self.rest_api_key.clone(),
            user_id: user_id.to_string(),
            user_pwd: password.to_string(),
            login_route_type: route_type.to_string(),
        };
        let body = serde_json::to_value(&request).expect("request body is valid JSON");

        let response = self.transport.post(&self.login_url, "login", body).await?;

        let token = response
            .get("loginToken")
            .and_then(|token| token.as_str())
            .unwrap_or_default();
        if token.is_empty() {
            debug!(user_id, "Login rejected by server");
            return Ok(LoginOutcome::Rejected(response));
        }

        let record: SessionRecord =
            serde_json::from_value(response).map_err(|e| TransportError::Malformed {
                operation: "login",
                detail: e.to_string(),
            })?;

        self.replace_session(record.clone());
        info!(user_id = %record.user_id, "Logged in");
        Ok(LoginOutcome::LoggedIn(record))
    }

    /// Log out of the current session.
    ///
    /// Returns `Skipped` without touching the network when no session is
    /// active. A response with a falsy `error` indicator clears the
    /// persisted session; a truthy one leaves it intact.
    pub async fn logout(&self) -> Result<LogoutOutcome, TransportError> {
        let Some(session) = self.current_session_value() else {
            debug!("Logout skipped: no active session");
            return Ok(LogoutOutcome::Skipped);
        };

        let request = LogoutRequest {
            rest_api_key: self.rest_api_key.clone(),
            login_token: session.login_token,
        };
        let body = serde_json::to_value(&request).expect("request body is valid JSON");

        let response = self.transport.post(&self.logout_url, "logout", body).await?;
        let response: LogoutResponse =
            serde_json::from_value(response).map_err(|e| TransportError::Malformed {
                operation: "logout",
                detail: e.to_string(),
            })?;

        if response.is_error() {
            debug!("Logout rejected by server");
            return Ok(LogoutOutcome::Rejected(response));
        }

        self.clear_session();
        info!("Logged out");
        Ok(LogoutOutcome::LoggedOut(response))
    }

    /// Replace the current user record wholesale.
    ///
    /// `Some` overwrites store and state and notifies subscribers, returning
    /// `true`. `None` changes nothing and returns `false`.
    pub fn update_current_user_info(&self, info: Option<SessionRecord>) -> bool {
        match info {
            Some(record) => {
                self.replace_session(record);
                true
            }
            None => false,
        }
    }

    fn replace_session(&self, record: SessionRecord) {
        let raw = serde_json::to_string(&record).expect("session record is valid JSON");
        self.store.set(CURRENT_USER_KEY, &raw);
        self.current.send_replace(Some(record));
    }

    fn clear_session(&self) {
        self.store.remove(CURRENT_USER_KEY);
        self.current.send_replace(None);
    }
}

/// Compose base URL + prefix + endpoint path, tolerating a trailing slash
/// on the base.
fn endpoint_url(config: &Config, path: &str) -> String {
    format!(
        "{}{}{}",
        config.api.base_url.trim_end_matches('/'),
        config.api.url_prefix,
        path
    )
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
