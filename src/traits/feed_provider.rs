use async_trait::async_trait;

use crate::models::{balance::WalletBalance, price::PricedAsset};

/// One-shot retrieval of the raw price feed
#[async_trait]
pub trait PriceFeedProvider: Send + Sync {
    /// Fetch every quoted record, in delivery order
    async fn fetch_prices(&self) -> anyhow::Result<Vec<PricedAsset>>;
}

/// One-shot retrieval of wallet balances
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Fetch all balance lines for the wallet
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>>;
}
