#![allow(dead_code)]

use treasury_tracker::config::{Config, DisplayConfig, TreasuryConfig};
use treasury_tracker::models::{PriceMap, TokenHolding, NATIVE_SOL_MINT};
use treasury_tracker::valuation::Valuator;

pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";
pub const FUNDRAISING_GOAL: f64 = 2_000_000.0;

// Helper to create a default test config
pub fn create_test_config() -> Config {
    Config {
        treasury: TreasuryConfig {
            address: "2n8etcRuK49GUMXWi2QRtQ8YwS6nTDEUjfX7LcvKFyiV".to_string(),
            fundraising_goal: FUNDRAISING_GOAL,
            quote_mints: Default::default(),
        },
        display: DisplayConfig::default(),
    }
}

pub fn create_test_valuator() -> Valuator {
    Valuator::from_config(&create_test_config().treasury).expect("test config is valid")
}

pub fn prices(entries: &[(&str, &str)]) -> PriceMap {
    let mut map = PriceMap::new();
    for (mint, price) in entries {
        map.insert(*mint, *price);
    }
    map
}

pub fn sol(amount: f64) -> TokenHolding {
    TokenHolding::new(NATIVE_SOL_MINT, amount)
}

/// One scenario: holdings, prices, expected USD total and percentage label.
pub struct Scenario {
    pub name: &'static str,
    pub holdings: Vec<TokenHolding>,
    pub prices: PriceMap,
    pub expected_usd: f64,
    pub expected_percent: &'static str,
}
