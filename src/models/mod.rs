use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod accounts;
pub mod holding;
pub mod price;

pub use accounts::holdings_from_token_accounts;
pub use holding::{HoldingAmount, TokenHolding, LAMPORTS_PER_SOL, NATIVE_SOL_MINT};
pub use price::{PriceInfo, PriceMap};

/// Aggregated positive amount per mint. Rebuilt on every valuation pass.
pub type MintAmountMap = BTreeMap<String, f64>;

/// One refresh cycle's worth of already-fetched data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValuationInput {
    #[serde(default, deserialize_with = "holding::deserialize_holdings")]
    pub holdings: Vec<TokenHolding>,
    #[serde(default)]
    pub prices: PriceMap,
}

impl ValuationInput {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
