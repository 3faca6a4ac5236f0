//! `signon init` — write a default configuration file.

use anyhow::Result;
use colored::Colorize;

use signon_core::config::{get_config_path, save_config, Config};

/// Run the init command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "Signon — Setup".cyan().bold());
    println!();

    let config_path = get_config_path();

    if config_path.exists() {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        save_config(&Config::default(), None)?;
        println!(
            "  {} created config at {}",
            "✓".green(),
            config_path.display()
        );
    }

    println!();
    println!("  Next steps:");
    println!(
        "    1. Set {} and {} in the config (or via env vars",
        "api.restApiKey".bold(),
        "api.baseUrl".bold()
    );
    println!(
        "       {} / {})",
        "SIGNON_API__REST_API_KEY".dimmed(),
        "SIGNON_API__BASE_URL".dimmed()
    );
    println!("    2. Run {} to authenticate", "signon login <USER_ID>".bold());
    println!();

    Ok(())
}
