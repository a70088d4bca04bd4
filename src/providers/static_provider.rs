use async_trait::async_trait;

use crate::models::{balance::WalletBalance, price::PricedAsset};
use crate::traits::feed_provider::{BalanceProvider, PriceFeedProvider};

/// Feed that hands out a fixed list of records
#[derive(Debug, Clone, Default)]
pub struct StaticPriceFeed {
    prices: Vec<PricedAsset>,
}

impl StaticPriceFeed {
    pub fn new(prices: Vec<PricedAsset>) -> Self {
        Self { prices }
    }
}

#[async_trait]
impl PriceFeedProvider for StaticPriceFeed {
    async fn fetch_prices(&self) -> anyhow::Result<Vec<PricedAsset>> {
        Ok(self.prices.clone())
    }
}

/// Balance source that hands out a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticBalanceProvider {
    balances: Vec<WalletBalance>,
}

impl StaticBalanceProvider {
    pub fn new(balances: Vec<WalletBalance>) -> Self {
        Self { balances }
    }
}

#[async_trait]
impl BalanceProvider for StaticBalanceProvider {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        Ok(self.balances.clone())
    }
}
