//! Configuration schema — typed sections for the identity API client.
//!
//! Hierarchy: `Config` → `ApiConfig`, `EndpointsConfig`, `StoreConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.signon/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub api: ApiConfig,
    pub endpoints: EndpointsConfig,
    pub store: StoreConfig,
}

// ─────────────────────────────────────────────
// API
// ─────────────────────────────────────────────

/// Identity API connection settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// Static API key sent with every identity request.
    #[serde(default)]
    pub rest_api_key: String,
    /// Base URL of the API site (e.g. `"https://api.example.com"`).
    #[serde(default)]
    pub base_url: String,
    /// Path prefix inserted between base URL and endpoint paths
    /// (e.g. `"/api/v1"`).
    #[serde(default)]
    pub url_prefix: String,
}

impl ApiConfig {
    /// Whether the API section is usable (key and base URL present).
    pub fn is_configured(&self) -> bool {
        !self.rest_api_key.is_empty() && !self.base_url.is_empty()
    }
}

// ─────────────────────────────────────────────
// Endpoints
// ─────────────────────────────────────────────

/// Named endpoint paths, grouped by resource.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointsConfig {
    #[serde(default)]
    pub user: UserEndpoints,
}

/// User-resource endpoint paths, appended after the URL prefix.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserEndpoints {
    /// Login path.
    #[serde(default = "default_login_path")]
    pub login: String,
    /// Logout path.
    #[serde(default = "default_logout_path")]
    pub logout: String,
}

fn default_login_path() -> String {
    "/user/login".to_string()
}

fn default_logout_path() -> String {
    "/user/logout".to_string()
}

impl Default for UserEndpoints {
    fn default() -> Self {
        Self {
            login: default_login_path(),
            logout: default_logout_path(),
        }
    }
}

// ─────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────

/// Session store settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Store file path. `None` uses `~/.signon/store.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.api.rest_api_key.is_empty());
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.endpoints.user.login, "/user/login");
        assert_eq!(config.endpoints.user.logout, "/user/logout");
        assert!(config.store.path.is_none());
        assert!(!config.api.is_configured());
    }

    #[test]
    fn config_from_json_camel_case() {
        let json = serde_json::json!({
            "api": {
                "restApiKey": "key-1",
                "baseUrl": "https://api.example.com",
                "urlPrefix": "/api/v1"
            },
            "endpoints": {
                "user": {
                    "login": "/auth/login"
                }
            },
            "store": {
                "path": "/tmp/store.json"
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.api.rest_api_key, "key-1");
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.url_prefix, "/api/v1");
        assert_eq!(config.endpoints.user.login, "/auth/login");
        // Defaults preserved for missing fields
        assert_eq!(config.endpoints.user.logout, "/user/logout");
        assert_eq!(config.store.path.as_deref(), Some("/tmp/store.json"));
        assert!(config.api.is_configured());
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.endpoints.user.login, "/user/login");
        assert!(!config.api.is_configured());
    }

    #[test]
    fn config_json_uses_camel_case() {
        let mut config = Config::default();
        config.api.rest_api_key = "k".to_string();

        let json = serde_json::to_value(&config).unwrap();
        assert!(json["api"].get("restApiKey").is_some());
        assert!(json["api"].get("baseUrl").is_some());
        assert!(json["api"].get("rest_api_key").is_none());
    }

    #[test]
    fn serialization_round_trip() {
        let mut config = Config::default();
        config.api.base_url = "https://api.example.com".to_string();
        config.store.path = Some("~/custom/store.json".to_string());

        let json_str = serde_json::to_string_pretty(&config).unwrap();
        let reloaded: Config = serde_json::from_str(&json_str).unwrap();
        assert_eq!(reloaded.api.base_url, config.api.base_url);
        assert_eq!(reloaded.store.path, config.store.path);
    }
}
