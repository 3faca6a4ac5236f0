//! `signon status` — show configuration and session state.

use anyhow::Result;
use colored::Colorize;

use signon_core::config::{get_config_path, load_config};
use signon_core::utils::get_store_path;

use crate::helpers;

/// Run the status command.
pub fn run() -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "Signon Status".cyan().bold());
    println!();

    // Config
    let config_exists = config_path.exists();
    println!(
        "  {:<12} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_exists {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // API
    let api_status = if config.api.is_configured() {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("  {:<12} {}", "API:".bold(), api_status);
    if !config.api.base_url.is_empty() {
        println!(
            "  {:<12} {}{}",
            "Base URL:".bold(),
            config.api.base_url,
            config.api.url_prefix.dimmed()
        );
    }
    println!(
        "  {:<12} {} | {}",
        "Endpoints:".bold(),
        config.endpoints.user.login.dimmed(),
        config.endpoints.user.logout.dimmed()
    );

    // Store
    let store_path = config
        .store
        .path
        .as_deref()
        .map(helpers::expand_tilde)
        .unwrap_or_else(get_store_path);
    println!("  {:<12} {}", "Store:".bold(), store_path.display());

    // Session
    println!();
    let manager = helpers::build_manager(&config)?;
    match manager.current_session_value() {
        Some(record) => {
            println!("  {}", "Session: active".green().bold());
            helpers::print_record(&record);
        }
        None => println!("  {}", "Session: none".yellow()),
    }
    println!();

    Ok(())
}
