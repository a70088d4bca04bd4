use async_trait::async_trait;

use crate::engine::conversion::ConversionState;
use crate::models::wallet::WalletRow;

/// Receiver of quote session updates
#[async_trait]
pub trait QuoteEventHandler: Send + Sync {
    /// Handle the current conversion
    async fn handle_conversion(&self, state: &ConversionState);

    /// Handle the ranked wallet rows
    async fn handle_wallet_rows(&self, rows: &[WalletRow]);

    /// Handle error
    async fn handle_error(&self, error: &anyhow::Error);
}
