use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::validation::{is_positive_amount, is_valid_mint, parse_number};

pub const NATIVE_SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const LAMPORTS_PER_SOL: f64 = 1e9;

/// Amount as reported by an account scan. Upstream payloads are not trusted to
/// carry a number here, so every JSON shape is accepted and judged later.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoldingAmount {
    Number(f64),
    Text(String),
    Flag(bool),
    #[default]
    Missing,
    Other(Value),
}

impl HoldingAmount {
    /// Numeric value of the amount, if it has one. Strings must parse in full.
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            HoldingAmount::Number(n) if n.is_finite() => Some(*n),
            HoldingAmount::Text(s) => parse_number(s),
            _ => None,
        }
    }
}

impl From<f64> for HoldingAmount {
    fn from(amount: f64) -> Self {
        HoldingAmount::Number(amount)
    }
}

impl From<&str> for HoldingAmount {
    fn from(amount: &str) -> Self {
        HoldingAmount::Text(amount.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenHolding {
    #[serde(default, deserialize_with = "lenient_mint")]
    pub mint: Option<String>,
    #[serde(default)]
    pub amount: HoldingAmount,
}

impl TokenHolding {
    pub fn new(mint: impl Into<String>, amount: f64) -> Self {
        Self {
            mint: Some(mint.into()),
            amount: HoldingAmount::Number(amount),
        }
    }

    pub fn with_amount(mint: Option<&str>, amount: impl Into<HoldingAmount>) -> Self {
        Self {
            mint: mint.map(str::to_string),
            amount: amount.into(),
        }
    }

    /// Holding for a wallet's native SOL balance, keyed by the wrapped SOL mint.
    pub fn native_sol(lamports: u64) -> Self {
        Self::new(NATIVE_SOL_MINT, lamports as f64 / LAMPORTS_PER_SOL)
    }

    /// The `(mint, amount)` pair when this holding may be aggregated.
    pub fn valid_entry(&self) -> Option<(&str, f64)> {
        if !is_valid_mint(self.mint.as_deref()) {
            return None;
        }
        let amount = self.amount.as_finite().filter(|a| is_positive_amount(*a))?;
        self.mint.as_deref().map(|mint| (mint, amount))
    }
}

fn lenient_mint<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Decodes a JSON array of holdings, dropping entries that are not objects.
pub fn deserialize_holdings<'de, D>(deserializer: D) -> std::result::Result<Vec<TokenHolding>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
