//! Core types for Signon — the session data model and the identity API
//! wire format.
//!
//! Wire and persisted JSON both use **camelCase** keys (`userId`,
//! `loginToken`, …); Rust uses snake_case with
//! `#[serde(rename_all = "camelCase")]` on every type.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Session record
// ─────────────────────────────────────────────

/// An authenticated identity, as returned by the login endpoint.
///
/// Besides `userId` and `loginToken`, the server may attach arbitrary
/// profile fields (nickname, avatar URL, …). Those ride along in `profile`
/// uninterpreted and round-trip through persistence untouched.
///
/// An active session always carries a non-empty `login_token`; "no session"
/// is modeled as `Option<SessionRecord>`, never as an empty record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// User identifier.
    #[serde(default)]
    pub user_id: String,
    /// Opaque session credential issued by the server.
    pub login_token: String,
    /// Additional profile fields, passed through opaquely.
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl SessionRecord {
    /// Create a record with just the identity fields.
    pub fn new(user_id: impl Into<String>, login_token: impl Into<String>) -> Self {
        SessionRecord {
            user_id: user_id.into(),
            login_token: login_token.into(),
            profile: serde_json::Map::new(),
        }
    }

    /// Whether the record satisfies the active-session invariant.
    pub fn has_token(&self) -> bool {
        !self.login_token.is_empty()
    }
}

// ─────────────────────────────────────────────
// Login routes
// ─────────────────────────────────────────────

/// Identity-provider tags accepted by the login endpoint.
///
/// The set is open — servers may accept tags beyond these — so the route
/// type stays a plain string rather than a closed enum.
pub mod route {
    /// Email + password (the default route).
    pub const EMAIL: &str = "email";
    /// Facebook.
    pub const FACEBOOK: &str = "fb";
    /// Google.
    pub const GOOGLE: &str = "googlep";
    /// KakaoTalk.
    pub const KAKAOTALK: &str = "kakaotalk";
    /// Any other provider.
    pub const OTHER: &str = "other";
}

// ─────────────────────────────────────────────
// Wire requests / responses
// ─────────────────────────────────────────────

/// Body of a login POST. Transient — never persisted.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Static API key from configuration.
    pub rest_api_key: String,
    /// User identifier.
    pub user_id: String,
    /// Password (or provider token, depending on route).
    pub user_pwd: String,
    /// Identity-provider tag, see [`route`].
    pub login_route_type: String,
}

/// Body of a logout POST. Transient — never persisted.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    /// Static API key from configuration.
    pub rest_api_key: String,
    /// Token of the session being ended.
    pub login_token: String,
}

/// Body of a logout response.
///
/// The server signals failure through the `error` field, which is read with
/// truthy/falsy semantics: absent, `null`, `false`, `0`, and `""` all count
/// as success. A body that is not a JSON object never reaches this type —
/// it is rejected as a malformed response upstream.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    /// Error indicator; see [`LogoutResponse::is_error`].
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub error: serde_json::Value,
    /// Additional response fields, passed through opaquely.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LogoutResponse {
    /// Truthiness of the error indicator.
    pub fn is_error(&self) -> bool {
        match &self.error {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            serde_json::Value::String(s) => !s.is_empty(),
            // Arrays and objects are truthy, even when empty.
            _ => true,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
