use async_trait::async_trait;
use tracing::{info, warn};

use crate::engine::conversion::ConversionState;
use crate::models::wallet::{format_rows, WalletRow};
use crate::traits::event_handler::QuoteEventHandler;
use crate::utils::helper::format_value;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteEventHandler for ConsoleEventHandler {
    async fn handle_conversion(&self, state: &ConversionState) {
        info!("{}", "=".repeat(60));
        info!(
            "Amount: {} {}",
            format_value(state.source_amount),
            state.source_symbol
        );
        info!(
            "Converted to: {} {}",
            format_value(state.target_amount),
            state.target_symbol
        );
        match state.rate() {
            Some(rate) => info!(
                "Rate: 1 {} = {} {}",
                state.source_symbol, rate, state.target_symbol
            ),
            None => info!("Rate: unavailable"),
        }
        info!("{}", "=".repeat(60));
    }

    async fn handle_wallet_rows(&self, rows: &[WalletRow]) {
        info!("Wallet balances:");
        info!("{}", "-".repeat(60));
        for line in format_rows(rows).lines() {
            info!("{}", line);
        }
        info!("{}", "-".repeat(60));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        warn!("Quote session error: {:#}", error);
    }
}
