//! Main entry point for the rating ledger console
//!
//! Loads configuration, sets up logging on stderr and runs one interactive
//! session over stdin/stdout.

use anyhow::Result;
use clap::Parser;
use rating_ledger::config::{validate_config, AppConfig};
use rating_ledger::session::{RandomOutcomeSource, SessionRunner, TerminalConsole};
use std::path::PathBuf;
use tracing::{error, info};

/// Rating Ledger - simulated games between two rated accounts
#[derive(Parser)]
#[command(
    name = "rating-ledger",
    version,
    about = "Console rating bookkeeping for two-player game accounts",
    long_about = "Rating Ledger asks for an account type and two players, simulates games \
                 with random outcomes and prints each account's history. Logs are written \
                 to stderr so the conversation on stdout stays clean."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Games per player override
    #[arg(short, long, value_name = "N", help = "Number of games simulated per player")]
    games: Option<u32>,

    /// Seed override
    #[arg(long, value_name = "SEED", help = "Seed the outcome generator for reproducible runs")]
    seed: Option<u64>,

    /// Print JSON snapshots
    #[arg(long, help = "Print both accounts as JSON after the stats")]
    json: bool,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without starting a session")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(games) = args.games {
        config.session.games_per_player = games;
    }

    if let Some(seed) = args.seed {
        config.session.seed = Some(seed);
    }

    if args.json {
        config.session.emit_json = true;
    }

    validate_config(&config)?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Some(path) = &args.config {
        info!("Loaded configuration from: {}", path.display());
    }

    if args.dry_run {
        info!(
            games_per_player = config.session.games_per_player,
            k_factor = config.rating.k_factor,
            "Configuration validation successful"
        );
        return Ok(());
    }

    let source = RandomOutcomeSource::new(
        config.session.seed,
        config.rating.opponent_rating_range(),
    );
    let mut runner = SessionRunner::new(TerminalConsole::stdio(), source, config);

    if let Err(e) = runner.run() {
        error!("Session failed: {}", e);
        return Err(e);
    }

    Ok(())
}
