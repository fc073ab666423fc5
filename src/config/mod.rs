use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::{validate_goal, validate_mint};

pub const DEFAULT_FUNDRAISING_GOAL: f64 = 2_000_000.0;
pub const GOAL_ENV: &str = "TREASURY_FUNDRAISING_GOAL";
pub const ADDRESS_ENV: &str = "TREASURY_ADDRESS";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub treasury: TreasuryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TreasuryConfig {
    /// Wallet whose holdings are valued. Informational for the pipeline itself.
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_goal")]
    pub fundraising_goal: f64,
    /// Mints to price. Empty means every held mint.
    #[serde(default)]
    pub quote_mints: BTreeSet<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_live_status")]
    pub live_status: String,
    #[serde(default = "default_error_status")]
    pub error_status: String,
}

fn default_goal() -> f64 {
    DEFAULT_FUNDRAISING_GOAL
}

fn default_live_status() -> String {
    "Live Progress".to_string()
}

fn default_error_status() -> String {
    "Connection Limited".to_string()
}

impl Default for TreasuryConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            fundraising_goal: DEFAULT_FUNDRAISING_GOAL,
            quote_mints: BTreeSet::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            live_status: default_live_status(),
            error_status: default_error_status(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config = Self::from_toml(&config_str)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }

    /// Rejects settings that would make every later valuation meaningless.
    pub fn validate(&self) -> Result<()> {
        validate_goal(self.treasury.fundraising_goal)?;
        for mint in &self.treasury.quote_mints {
            validate_mint(mint).map_err(|e| Error::ConfigError(format!("Invalid quote mint: {}", e)))?;
        }
        Ok(())
    }

    /// Applies `TREASURY_FUNDRAISING_GOAL` and `TREASURY_ADDRESS` when set, then revalidates.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(env::var(GOAL_ENV).ok(), env::var(ADDRESS_ENV).ok())
    }

    fn apply_overrides(&mut self, goal: Option<String>, address: Option<String>) -> Result<()> {
        if let Some(goal) = goal {
            self.treasury.fundraising_goal = goal.trim().parse::<f64>().map_err(|e| {
                Error::ConfigError(format!("{} must be a number, got '{}': {}", GOAL_ENV, goal, e))
            })?;
            info!("Fundraising goal overridden from environment: {}", self.treasury.fundraising_goal);
        }
        if let Some(address) = address {
            self.treasury.address = address;
        }
        self.validate()
    }
}
