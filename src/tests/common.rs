use std::collections::BTreeSet;

use crate::config::{Config, DisplayConfig, TreasuryConfig};
use crate::models::{PriceMap, TokenHolding, NATIVE_SOL_MINT};
use crate::valuation::Valuator;

pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";

// Helper to create a default test config
pub fn create_test_config() -> Config {
    Config {
        treasury: TreasuryConfig {
            address: "2n8etcRuK49GUMXWi2QRtQ8YwS6nTDEUjfX7LcvKFyiV".to_string(),
            fundraising_goal: 2_000_000.0,
            quote_mints: BTreeSet::new(),
        },
        display: DisplayConfig::default(),
    }
}

pub fn create_test_valuator() -> Valuator {
    Valuator::from_config(&create_test_config().treasury).unwrap()
}

pub fn price_table(entries: &[(&str, &str)]) -> PriceMap {
    let mut prices = PriceMap::new();
    for (mint, price) in entries {
        prices.insert(*mint, *price);
    }
    prices
}

/// 3000 SOL at $100 plus 150k USDC and 50k USDT.
pub fn mixed_treasury() -> (Vec<TokenHolding>, PriceMap) {
    let holdings = vec![
        TokenHolding::new(NATIVE_SOL_MINT, 3000.0),
        TokenHolding::new(USDC_MINT, 150000.0),
        TokenHolding::new(USDT_MINT, 50000.0),
    ];
    let prices = price_table(&[(NATIVE_SOL_MINT, "100"), (USDC_MINT, "1"), (USDT_MINT, "1")]);
    (holdings, prices)
}
