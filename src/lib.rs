pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod validation;
pub mod valuation;

pub use error::{Error, Result};
pub use models::{PriceMap, TokenHolding};
pub use valuation::{aggregate_by_mint, compute_usd_total, format_percentage, format_usd_value, Valuator};

// Declare tests module only when testing
#[cfg(test)]
pub mod tests;
