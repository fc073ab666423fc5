use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::validation::parse_float_prefix;

/// Spot price entry. Feeds publish prices as decimal strings; numeric JSON values
/// are normalised to strings on the way in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceInfo {
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<String>,
}

impl PriceInfo {
    pub fn new(price: impl Into<String>) -> Self {
        Self {
            price: Some(price.into()),
        }
    }

    /// Parsed USD price, or `None` when the entry is missing, empty or not a finite number.
    pub fn usd(&self) -> Option<f64> {
        self.price
            .as_deref()
            .filter(|p| !p.is_empty())
            .and_then(parse_float_prefix)
    }
}

fn lenient_price<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(price_text(&Value::deserialize(deserializer)?))
}

fn price_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Sparse mint -> price lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PriceMap(HashMap<String, PriceInfo>);

/// Entries that are not price objects (e.g. `null`) are treated as absent.
impl<'de> Deserialize<'de> for PriceMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(mint, entry)| match serde_json::from_value::<PriceInfo>(entry) {
                Ok(info) => Some((mint, info)),
                Err(e) => {
                    debug!("Dropping malformed price entry for {}: {}", mint, e);
                    None
                }
            })
            .collect())
    }
}

impl PriceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mint: impl Into<String>, price: impl Into<String>) {
        self.0.insert(mint.into(), PriceInfo::new(price));
    }

    pub fn insert_info(&mut self, mint: impl Into<String>, info: PriceInfo) {
        self.0.insert(mint.into(), info);
    }

    pub fn get(&self, mint: &str) -> Option<&PriceInfo> {
        self.0.get(mint)
    }

    pub fn usd_price(&self, mint: &str) -> Option<f64> {
        self.get(mint).and_then(PriceInfo::usd)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a price map from a price API payload.
    ///
    /// Accepts the `{ "data": { <mint>: { "price": .. } } }` envelope as well as a bare
    /// `{ <mint>: { "usdPrice": .. } }` object. Entries without a readable price are dropped.
    pub fn from_price_feed_response(response: &Value) -> Self {
        let entries = match response.get("data") {
            Some(Value::Object(data)) => data,
            _ => match response {
                Value::Object(top) => top,
                _ => return Self::new(),
            },
        };

        entries
            .iter()
            .filter_map(|(mint, entry)| {
                let price = entry
                    .get("price")
                    .or_else(|| entry.get("usdPrice"))
                    .and_then(price_text);
                match price {
                    Some(price) => Some((mint.clone(), PriceInfo::new(price))),
                    None => {
                        debug!("Price feed returned no price for {}", mint);
                        None
                    }
                }
            })
            .collect()
    }
}

impl FromIterator<(String, PriceInfo)> for PriceMap {
    fn from_iter<I: IntoIterator<Item = (String, PriceInfo)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
