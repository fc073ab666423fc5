use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};

use treasury_tracker::cli::Cli;
use treasury_tracker::config::Config;
use treasury_tracker::display::{self, ConsoleDisplay, MemoryDisplay, TreasuryDisplay};
use treasury_tracker::error::Error;
use treasury_tracker::models::ValuationInput;
use treasury_tracker::valuation::{Valuation, Valuator};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    treasury_tracker::logging::init(cli.debug, cli.log_file.as_deref())?;

    let config_path = cli.config.clone().unwrap_or_else(|| PathBuf::from("config/config.toml"));
    let mut config = if config_path.exists() {
        Config::load(&config_path)
            .with_context(|| format!("Failed to load configuration from {:?}", config_path))?
    } else {
        warn!("No configuration at {:?}, using defaults", config_path);
        Config::default()
    };
    config.apply_env_overrides()?;

    let valuator = Valuator::from_config(&config.treasury)?;
    info!(
        "Tracking treasury {} against a ${} goal",
        config.treasury.address,
        valuator.goal().usd()
    );

    let snapshot = fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("Failed to read snapshot {:?}", cli.snapshot))?;
    let input = ValuationInput::from_json(&snapshot)?;
    info!(
        "Snapshot: {} holdings, {} prices",
        input.holdings.len(),
        input.prices.len()
    );

    let valuation = valuator.value(&input.holdings, &input.prices);
    for mint in &valuation.unpriced {
        warn!("No usable price for {}", mint);
    }

    let updated = if cli.json {
        let mut memory = MemoryDisplay::new();
        let updated = paint(&mut memory, &valuation, &config, cli.stale);
        println!("{}", serde_json::to_string_pretty(&memory)?);
        updated
    } else {
        paint(&mut ConsoleDisplay::new(), &valuation, &config, cli.stale)
    };

    if !updated {
        error!("Display update incomplete");
        return Err(Error::DisplayError("display update incomplete".to_string()).into());
    }
    Ok(())
}

fn paint<D: TreasuryDisplay>(display: &mut D, valuation: &Valuation, config: &Config, stale: bool) -> bool {
    if stale {
        display::render_stale(display, valuation, &config.display.error_status)
    } else {
        display::render(display, valuation, &config.display.live_status)
    }
}
