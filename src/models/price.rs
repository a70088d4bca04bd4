use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One quoted price of one asset at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedAsset {
    #[serde(rename = "currency")]
    pub symbol: String,
    #[serde(rename = "date", default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(rename = "price")]
    pub unit_price: f64,
}

impl PricedAsset {
    /// Create a new priced asset
    pub fn new(symbol: impl Into<String>, unit_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            observed_at: None,
            unit_price,
        }
    }

    /// Attach the observation time
    pub fn observed_at(mut self, at: DateTime<Utc>) -> Self {
        self.observed_at = Some(at);
        self
    }
}

/// Parse a raw price feed, keeping records in delivery order
pub fn parse_price_feed(json: &str) -> anyhow::Result<Vec<PricedAsset>> {
    serde_json::from_str(json).context("Invalid price feed")
}
