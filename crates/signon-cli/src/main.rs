//! Signon CLI — entry point.
//!
//! # Commands
//!
//! - `signon init` — write a default config file
//! - `signon login <USER_ID> -p <PASSWORD> [-r ROUTE]` — authenticate and persist the session
//! - `signon logout` — end the current session
//! - `signon whoami` — show the current session
//! - `signon status` — show configuration and session state

mod helpers;
mod init;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use signon_client::{LoginOutcome, LogoutOutcome};
use signon_core::config::load_config;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Signon — session-identity client
#[derive(Parser)]
#[command(name = "signon", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,

    /// Authenticate and persist the session
    Login {
        /// User identifier
        user_id: String,

        /// Password (or provider token, depending on route)
        #[arg(short, long)]
        password: String,

        /// Identity-provider route (email, fb, googlep, kakaotalk, other)
        #[arg(short, long, default_value = "email")]
        route: String,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Show configuration and session state
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    match cli.command {
        Commands::Init => init::run(),
        Commands::Login {
            user_id,
            password,
            route,
        } => run_login(&user_id, &password, &route).await,
        Commands::Logout => run_logout().await,
        Commands::Whoami => run_whoami(),
        Commands::Status => status::run(),
    }
}

// ─────────────────────────────────────────────
// Session commands
// ─────────────────────────────────────────────

async fn run_login(user_id: &str, password: &str, route: &str) -> Result<()> {
    let config = load_config(None);
    let manager = helpers::build_manager(&config)?;

    info!(user_id, route, "logging in");
    match manager.login(user_id, password, route).await? {
        LoginOutcome::LoggedIn(record) => {
            println!("{}", "Logged in".green().bold());
            helpers::print_record(&record);
        }
        LoginOutcome::Rejected(body) => {
            println!("{}", "Login rejected".red().bold());
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        LoginOutcome::Skipped => {
            println!(
                "{}",
                "Nothing sent — user id and route are required".yellow()
            );
        }
    }

    Ok(())
}

async fn run_logout() -> Result<()> {
    let config = load_config(None);
    let manager = helpers::build_manager(&config)?;

    match manager.logout().await? {
        LogoutOutcome::LoggedOut(_) => println!("{}", "Logged out".green().bold()),
        LogoutOutcome::Rejected(response) => {
            println!("{}", "Logout rejected".red().bold());
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        LogoutOutcome::Skipped => println!("{}", "No active session".yellow()),
    }

    Ok(())
}

fn run_whoami() -> Result<()> {
    let config = load_config(None);
    let manager = helpers::build_manager(&config)?;

    match manager.current_session_value() {
        Some(record) => helpers::print_record(&record),
        None => println!("{}", "Not logged in".yellow()),
    }

    Ok(())
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("signon_core=debug,signon_client=debug,signon_cli=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
