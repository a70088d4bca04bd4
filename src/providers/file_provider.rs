use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use crate::models::{
    balance::{parse_balances, WalletBalance},
    price::{parse_price_feed, PricedAsset},
};
use crate::traits::feed_provider::{BalanceProvider, PriceFeedProvider};

/// Price feed read from a JSON file
pub struct FilePriceFeed {
    path: PathBuf,
}

impl FilePriceFeed {
    /// Create a new file price feed
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PriceFeedProvider for FilePriceFeed {
    async fn fetch_prices(&self) -> anyhow::Result<Vec<PricedAsset>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read price feed {}", self.path.display()))?;
        let prices = parse_price_feed(&raw)
            .with_context(|| format!("Failed to parse price feed {}", self.path.display()))?;
        debug!("Loaded {} price records from {}", prices.len(), self.path.display());
        Ok(prices)
    }
}

/// Wallet balances read from a JSON file
pub struct FileBalanceProvider {
    path: PathBuf,
}

impl FileBalanceProvider {
    /// Create a new file balance provider
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BalanceProvider for FileBalanceProvider {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read balances {}", self.path.display()))?;
        let balances = parse_balances(&raw)
            .with_context(|| format!("Failed to parse balances {}", self.path.display()))?;
        debug!("Loaded {} balances from {}", balances.len(), self.path.display());
        Ok(balances)
    }
}
