//! Gatelock CLI - Main entry point
//!
//! Interactive password prompt guarded by an attempt-counting lockout.

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gatelock_cli::{ConsolePresenter, HostConfig, Session};
use gatelock_core::{GuardState, LoginGuard};

#[derive(Parser)]
#[command(name = "gatelock")]
#[command(about = "Password prompt with attempt-counting lockout", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive session
    Run {
        /// Path to host configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured attempt ceiling
        #[arg(short, long)]
        max_attempts: Option<u32>,

        /// Override the configured exit keyword
        #[arg(short, long)]
        exit_keyword: Option<String>,
    },

    /// Configuration management commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show the effective configuration
    Show {
        /// Configuration path
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatelock=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            max_attempts,
            exit_keyword,
        } => run_session(config, max_attempts, exit_keyword),
        Commands::Config(cmd) => handle_config_command(cmd),
    }
}

fn run_session(
    config_path: Option<PathBuf>,
    max_attempts: Option<u32>,
    exit_keyword: Option<String>,
) -> Result<()> {
    let path = config_path.unwrap_or_else(HostConfig::default_path);
    let mut config = if path.exists() {
        HostConfig::load(&path)?
    } else {
        HostConfig::default()
    };

    if let Some(max) = max_attempts {
        config.max_attempts = max;
    }
    if let Some(keyword) = exit_keyword {
        config.exit_keyword = keyword;
    }
    config.validate()?;

    info!(max_attempts = config.max_attempts, "starting session");

    let guard = LoginGuard::with_max_attempts(config.credential.as_str(), config.max_attempts)?;
    let session = Session::new(guard, config.exit_keyword);

    let stdin = std::io::stdin();
    let mut presenter = ConsolePresenter;
    let report = session.run(BufReader::new(stdin.lock()), &mut presenter)?;

    info!(
        attempts = report.attempts,
        failures = report.log.failure_count(),
        "session ended"
    );

    if report.final_state == GuardState::Locked {
        anyhow::bail!("account locked after too many failed attempts");
    }

    Ok(())
}

fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { path } => {
            let path = path.unwrap_or_else(HostConfig::default_path);
            if path.exists() {
                anyhow::bail!("Config already exists at: {}", path.display());
            }
            HostConfig::default().save(&path)?;
            println!("✓ Config written to: {}", path.display());
        }

        ConfigCommands::Show { path } => {
            let path = path.unwrap_or_else(HostConfig::default_path);
            let config = if path.exists() {
                HostConfig::load(&path)?
            } else {
                HostConfig::default()
            };

            println!("Host Configuration:");
            println!("  Path: {}", path.display());
            println!("  Max Attempts: {}", config.max_attempts);
            println!("  Exit Keyword: {}", config.exit_keyword);
            println!("  Credential: <redacted> ({} bytes)", config.credential.len());
        }
    }

    Ok(())
}
