// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vistat -- a Telegram bot for video-statistics questions.
//!
//! Binary entry point: loads configuration, then dispatches subcommands.

mod serve;

use clap::{Parser, Subcommand};

/// Vistat -- a Telegram bot for video-statistics questions.
#[derive(Parser, Debug)]
#[command(name = "vistat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the bot: connect to the database and poll Telegram.
    Serve,
    /// Print the effective configuration (secrets masked).
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match vistat_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            vistat_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("vistat serve failed: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            print_config_summary(&config);
        }
        None => {
            println!("vistat: use --help for available commands");
        }
    }
}

/// Prints the effective configuration with secrets masked.
fn print_config_summary(config: &vistat_config::VistatConfig) {
    println!("agent.name          = {}", config.agent.name);
    println!("agent.log_level     = {}", config.agent.log_level);
    println!(
        "telegram.bot_token  = {}",
        mask_presence(config.telegram.bot_token.as_deref())
    );
    println!(
        "deepseek.api_key    = {}",
        mask_presence(config.deepseek.api_key.as_deref())
    );
    println!("deepseek.model      = {}", config.deepseek.model);
    println!(
        "database            = {}@{}:{}/{}",
        config.database.user, config.database.host, config.database.port, config.database.dbname
    );
}

fn mask_presence(value: Option<&str>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => "<set>",
        _ => "<unset>",
    }
}
