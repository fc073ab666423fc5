//! Treasury valuation: aggregate holdings per mint, price them, and express the
//! USD total as progress toward the fundraising goal.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::TreasuryConfig;
use crate::error::Result;
use crate::models::{MintAmountMap, PriceMap, TokenHolding};
use crate::validation::validate_goal;

pub mod format;

pub use format::{format_percentage, format_usd_value, to_fixed};

/// USD target the treasury is measured against. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FundraisingGoal(f64);

impl FundraisingGoal {
    pub fn new(usd: f64) -> Result<Self> {
        validate_goal(usd).map(Self)
    }

    pub fn usd(&self) -> f64 {
        self.0
    }

    /// `total / goal * 100`, clamped to `[0, 100]`.
    pub fn progress_percent(&self, total_usd: f64) -> f64 {
        let percent = total_usd / self.0 * 100.0;
        if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        }
    }
}

impl TryFrom<f64> for FundraisingGoal {
    type Error = crate::error::Error;

    fn try_from(usd: f64) -> Result<Self> {
        Self::new(usd)
    }
}

/// Order in which holdings are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingOrder {
    /// Sum amounts per mint, then multiply each aggregate by its price.
    #[default]
    AggregateThenPrice,
    /// Price every valid holding on its own and sum the contributions.
    PricePerHolding,
}

/// Sums valid holdings per mint.
///
/// A holding counts only with a non-empty mint and a finite amount above zero.
/// Amounts for a mint are summed in ascending order, so any permutation of the
/// input produces a bit-identical map. A mint whose sum overflows is dropped.
pub fn aggregate_by_mint(holdings: &[TokenHolding]) -> MintAmountMap {
    let mut amounts: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (mint, amount) in holdings.iter().filter_map(TokenHolding::valid_entry) {
        amounts.entry(mint).or_default().push(amount);
    }

    amounts
        .into_iter()
        .filter_map(|(mint, mut values)| {
            let total = sorted_sum(&mut values);
            if total.is_finite() {
                Some((mint.to_string(), total))
            } else {
                warn!("Aggregate amount for mint {} is not finite, skipped", mint);
                None
            }
        })
        .collect()
}

/// USD value of `holdings`, aggregating first. Mints without a usable price contribute nothing.
pub fn compute_usd_total(holdings: &[TokenHolding], prices: &PriceMap) -> f64 {
    compute_usd_total_with(holdings, prices, PricingOrder::AggregateThenPrice)
}

pub fn compute_usd_total_with(
    holdings: &[TokenHolding],
    prices: &PriceMap,
    order: PricingOrder,
) -> f64 {
    match order {
        PricingOrder::AggregateThenPrice => aggregate_by_mint(holdings)
            .iter()
            .filter_map(|(mint, amount)| contribution(mint, *amount, prices))
            .sum(),
        PricingOrder::PricePerHolding => price_per_holding(holdings, prices, |_| true),
    }
}

fn price_per_holding(
    holdings: &[TokenHolding],
    prices: &PriceMap,
    include: impl Fn(&str) -> bool,
) -> f64 {
    let mut contributions: Vec<f64> = holdings
        .iter()
        .filter_map(TokenHolding::valid_entry)
        .filter(|(mint, _)| include(mint))
        .filter_map(|(mint, amount)| contribution(mint, amount, prices))
        .collect();
    sorted_sum(&mut contributions)
}

/// `amount * price`, or `None` when the mint has no usable price or the product is not finite.
fn contribution(mint: &str, amount: f64, prices: &PriceMap) -> Option<f64> {
    let price = prices.usd_price(mint)?;
    finite_value(mint, amount, price)
}

fn finite_value(mint: &str, amount: f64, price: f64) -> Option<f64> {
    let value = amount * price;
    if value.is_finite() {
        Some(value)
    } else {
        warn!("USD value for mint {} ({} * {}) is not finite, skipped", mint, amount, price);
        None
    }
}

fn sorted_sum(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MintValuation {
    pub mint: String,
    pub amount: f64,
    pub price: f64,
    pub usd_value: f64,
}

/// Result of one valuation pass. `total_usd` is never rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub total_usd: f64,
    pub percent: f64,
    pub goal_usd: f64,
    pub breakdown: Vec<MintValuation>,
    /// Held mints with no usable price.
    pub unpriced: Vec<String>,
    /// Held mints outside the configured quote set.
    pub unquoted: Vec<String>,
}

impl Valuation {
    pub fn formatted_value(&self) -> String {
        format_usd_value(self.total_usd)
    }

    pub fn formatted_percent(&self) -> String {
        format::format_percent(self.percent)
    }

    pub fn goal_reached(&self) -> bool {
        self.total_usd >= self.goal_usd
    }
}

/// Valuation entry point, configured with the goal and the mints to price.
#[derive(Debug, Clone)]
pub struct Valuator {
    goal: FundraisingGoal,
    quote_mints: BTreeSet<String>,
    order: PricingOrder,
}

impl Valuator {
    pub fn new(goal: FundraisingGoal, quote_mints: BTreeSet<String>) -> Self {
        Self {
            goal,
            quote_mints,
            order: PricingOrder::default(),
        }
    }

    pub fn from_config(config: &TreasuryConfig) -> Result<Self> {
        Ok(Self::new(
            FundraisingGoal::new(config.fundraising_goal)?,
            config.quote_mints.clone(),
        ))
    }

    pub fn with_order(mut self, order: PricingOrder) -> Self {
        self.order = order;
        self
    }

    pub fn goal(&self) -> FundraisingGoal {
        self.goal
    }

    fn is_quoted(&self, mint: &str) -> bool {
        self.quote_mints.is_empty() || self.quote_mints.contains(mint)
    }

    /// Mints a price feed should be asked for, in sorted order.
    pub fn price_request_mints(&self, holdings: &[TokenHolding]) -> Vec<String> {
        aggregate_by_mint(holdings)
            .into_keys()
            .filter(|mint| self.is_quoted(mint))
            .collect()
    }

    pub fn value(&self, holdings: &[TokenHolding], prices: &PriceMap) -> Valuation {
        let aggregated = aggregate_by_mint(holdings);
        let mut breakdown = Vec::with_capacity(aggregated.len());
        let mut unpriced = Vec::new();
        let mut unquoted = Vec::new();

        for (mint, amount) in aggregated {
            if !self.is_quoted(&mint) {
                debug!("Mint {} is outside the quote set, not priced", mint);
                unquoted.push(mint);
                continue;
            }
            match prices.usd_price(&mint) {
                Some(price) => {
                    let Some(usd_value) = finite_value(&mint, amount, price) else {
                        unpriced.push(mint);
                        continue;
                    };
                    debug!("{}: {} * ${} = ${}", mint, amount, price, usd_value);
                    breakdown.push(MintValuation {
                        mint,
                        amount,
                        price,
                        usd_value,
                    });
                }
                None => {
                    match prices.get(&mint) {
                        Some(info) => warn!("Invalid price for mint {}: {:?}", mint, info.price),
                        None => warn!("No price for mint {}", mint),
                    }
                    unpriced.push(mint);
                }
            }
        }

        let total_usd: f64 = match self.order {
            PricingOrder::AggregateThenPrice => breakdown.iter().map(|m| m.usd_value).sum(),
            PricingOrder::PricePerHolding => {
                price_per_holding(holdings, prices, |mint| self.is_quoted(mint))
            }
        };

        let valuation = Valuation {
            total_usd,
            percent: self.goal.progress_percent(total_usd),
            goal_usd: self.goal.usd(),
            breakdown,
            unpriced,
            unquoted,
        };
        debug!(
            "Valued {} holdings at ${} ({})",
            holdings.len(),
            valuation.total_usd,
            valuation.formatted_percent()
        );
        valuation
    }
}
