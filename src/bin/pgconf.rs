//! pgconf CLI: validate Postgres settings and print the connection URI.

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pgconf::config::{PasswordSource, Settings};
use pgconf::telemetry::{TracingConfig, init_tracing};
use secrecy::ExposeSecret;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pgconf", about = "Postgres settings from the environment")]
struct Cli {
    /// Load variables from this file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the settings and exit
    Check,
    /// Print the connection URI (password masked unless --reveal)
    Uri {
        /// Print the password in clear text
        #[arg(long)]
        reveal: bool,
    },
    /// Print the resolved settings without secrets
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    init_tracing(TracingConfig {
        log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
    })?;

    let settings = Settings::from_env()?;

    match cli.command {
        Command::Check => cmd_check(&settings),
        Command::Uri { reveal } => cmd_uri(&settings, reveal),
        Command::Show { json } => cmd_show(&settings, json),
    }
}

fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    tracing::info!(uri = %settings.redacted_uri()?, "postgres settings are valid");
    Ok(())
}

fn cmd_uri(settings: &Settings, reveal: bool) -> anyhow::Result<()> {
    if reveal {
        println!("{}", settings.database_uri()?.expose_secret());
    } else {
        println!("{}", settings.redacted_uri()?);
    }
    Ok(())
}

fn cmd_show(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let summary = settings.summary()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let source = match &summary.password_source {
        PasswordSource::Literal => "POSTGRES_PASSWORD".to_string(),
        PasswordSource::File(path) => format!("file {}", path.display()),
    };

    println!("Server:     {}", summary.server);
    println!("Port:       {}", summary.port);
    println!("User:       {}", summary.user);
    println!("Database:   {}", summary.database);
    println!("Password:   {source}");
    println!("URI:        {}", summary.uri);
    Ok(())
}
