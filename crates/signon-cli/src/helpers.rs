//! Shared CLI helpers — path expansion, manager construction, record
//! printing.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use signon_client::{HttpTransport, SessionManager};
use signon_core::config::Config;
use signon_core::store::FileStore;
use signon_core::types::SessionRecord;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Build a `SessionManager` from the loaded configuration.
pub fn build_manager(config: &Config) -> Result<SessionManager> {
    let store_path = config.store.path.as_deref().map(expand_tilde);
    let store = FileStore::open(store_path).context("failed to open session store")?;

    Ok(SessionManager::new(
        config,
        Arc::new(HttpTransport::new()),
        Arc::new(store),
    ))
}

/// Print a session record to stdout.
pub fn print_record(record: &SessionRecord) {
    println!(
        "  {:<12} {}",
        "User:".bold(),
        if record.user_id.is_empty() {
            "(unknown)".dimmed().to_string()
        } else {
            record.user_id.clone()
        }
    );
    println!(
        "  {:<12} {}",
        "Token:".bold(),
        mask_token(&record.login_token).dimmed()
    );
    for (key, value) in &record.profile {
        println!("  {:<12} {}", format!("{key}:").bold(), value);
    }
}

/// Shorten a token for display — enough to recognize, not enough to reuse.
fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        "…".to_string()
    } else {
        let prefix: String = token.chars().take(8).collect();
        format!("{prefix}…")
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
