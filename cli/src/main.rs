//! Toll Fee — CLI
//!
//! Computes the toll fee for one vehicle and one day of passes.
//!
//! ```sh
//! # Passes on the command line
//! toll-fee --vehicle Car --pass "2024-08-29 06:30" --pass "2024-08-29 07:20"
//!
//! # Request from a JSON file
//! toll-fee --request passes.json
//!
//! # Custom config path
//! toll-fee --config /etc/toll-fee/config.toml --vehicle Car --pass "2024-08-29 08:00"
//!
//! # Validate config without computing anything
//! toll-fee --check
//! ```

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;
use tracing::{error, info};

use toll_fee::support::time::parse_pass_timestamp;
use toll_fee::{
    default_config_path, init_tracing, AppConfig, AppError, ConfigError, LoggingConfig,
    TollFeeEngine, TollRequest, VehicleType,
};

/// Toll Fee — road toll calculator with one-hour grouping and a daily cap.
#[derive(Parser, Debug)]
#[command(
    name = "toll-fee",
    version,
    about = "Road toll fee calculator",
    long_about = "Computes the toll fee for one vehicle and one calendar day of passes.\n\n\
                  Default config: ~/.config/toll-fee/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TOLL_FEE_CONFIG")]
    config: Option<PathBuf>,

    /// Vehicle type (Car, Motorbike, Bicycle, Tractor, Emergency, Diplomat, Foreign, Military).
    #[arg(long)]
    vehicle: Option<VehicleType>,

    /// Pass timestamp, `YYYY-MM-DD HH:MM[:SS]`. Repeat for several passes.
    #[arg(long = "pass", value_parser = parse_pass_timestamp)]
    passes: Vec<NaiveDateTime>,

    /// Read the request from a JSON file instead of --vehicle/--pass.
    #[arg(long, conflicts_with_all = ["vehicle", "passes"])]
    request: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
            return Ok(run(&cli, AppConfig::default())?);
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);
    info!("Configuration loaded from {}", config_path.display());

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        let engine = TollFeeEngine::from_config(&config);
        let issues = engine.schedule().inconsistencies();
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Intervals   : {}", engine.schedule().intervals().len());
        println!("   Daily cap   : {}", config.max_fee);
        println!("   Window      : {} min ({:?})", config.window_minutes, config.window_rule);
        println!("   Holidays    : {}", config.holidays.len());
        for issue in &issues {
            println!("   Warning     : {issue}");
        }
        return Ok(());
    }

    Ok(run(&cli, config)?)
}

fn run(cli: &Cli, config: AppConfig) -> Result<(), AppError> {
    let request = match cli.request {
        Some(ref path) => {
            let json = std::fs::read_to_string(path).map_err(ConfigError::from)?;
            TollRequest::from_json(&json)?
        }
        None => TollRequest {
            vehicle: cli.vehicle,
            passes: (!cli.passes.is_empty()).then(|| cli.passes.clone()),
        },
    };

    let engine = TollFeeEngine::from_config(&config);
    match engine.calculate(&request) {
        Ok(fee) => {
            println!("{fee}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Toll request rejected");
            Err(e.into())
        }
    }
}
