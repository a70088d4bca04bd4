use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::{
    conversion::{ConversionDefaults, ConversionState},
    ranker::{wallet_rows, BalanceRanker},
};
use crate::models::{
    balance::{RankedBalance, WalletBalance},
    price::PricedAsset,
    wallet::WalletRow,
};
use crate::providers::price_table::PriceTable;
use crate::traits::{
    event_handler::QuoteEventHandler,
    feed_provider::{BalanceProvider, PriceFeedProvider},
};

/// Holds the latest price snapshot, the conversion calculator and the
/// ranked wallet, and recomputes them only when their inputs change.
pub struct QuoteSession {
    defaults: ConversionDefaults,
    ranker: BalanceRanker,
    event_handler: Arc<dyn QuoteEventHandler>,
    prices: PriceTable,
    conversion: ConversionState,
    initialized: bool,
    ranked: Vec<RankedBalance>,
}

impl QuoteSession {
    /// Create a new quote session with no prices and no balances
    pub fn new(
        defaults: ConversionDefaults,
        ranker: BalanceRanker,
        event_handler: Arc<dyn QuoteEventHandler>,
    ) -> Self {
        let conversion = ConversionState::new(&defaults);
        Self {
            defaults,
            ranker,
            event_handler,
            prices: PriceTable::default(),
            conversion,
            initialized: false,
            ranked: Vec::new(),
        }
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn conversion(&self) -> &ConversionState {
        &self.conversion
    }

    pub fn ranked(&self) -> &[RankedBalance] {
        &self.ranked
    }

    /// Replace the price table with a new snapshot.
    ///
    /// The first non-empty snapshot selects the default currencies; later
    /// ones refresh the conversion against the new prices.
    pub fn apply_price_snapshot(&mut self, assets: Vec<PricedAsset>) {
        self.prices = PriceTable::build(assets);

        if self.prices.is_empty() {
            warn!("Price snapshot is empty");
            return;
        }

        self.conversion = if self.initialized {
            self.conversion.refresh(&self.prices)
        } else {
            self.initialized = true;
            ConversionState::initialize(&self.defaults, &self.prices)
        };
        debug!("Applied price snapshot with {} symbols", self.prices.len());
    }

    /// Fetch a snapshot from the feed and apply it. On failure the previous
    /// table stays in place and the error goes to the event handler.
    pub async fn load_prices(&mut self, feed: &dyn PriceFeedProvider) -> anyhow::Result<()> {
        match feed.fetch_prices().await {
            Ok(assets) => {
                info!("Fetched {} price records", assets.len());
                self.apply_price_snapshot(assets);
                Ok(())
            }
            Err(e) => {
                self.event_handler.handle_error(&e).await;
                Err(e)
            }
        }
    }

    /// Rank a new balance list; the result is kept until the next call
    pub fn set_balances(&mut self, balances: &[WalletBalance]) {
        self.ranked = self.ranker.rank(balances);
        debug!(
            "Ranked {} of {} balances",
            self.ranked.len(),
            balances.len()
        );
    }

    /// Fetch balances from a provider and rank them
    pub async fn load_balances(&mut self, provider: &dyn BalanceProvider) -> anyhow::Result<()> {
        match provider.fetch_balances().await {
            Ok(balances) => {
                self.set_balances(&balances);
                Ok(())
            }
            Err(e) => {
                self.event_handler.handle_error(&e).await;
                Err(e)
            }
        }
    }

    /// Ranked balances with display values from the current table
    pub fn wallet_rows(&self) -> Vec<WalletRow> {
        wallet_rows(&self.ranked, &self.prices)
    }

    pub fn edit_source_amount(&mut self, amount: f64) -> &ConversionState {
        self.conversion = self.conversion.update_from_source(amount);
        &self.conversion
    }

    pub fn edit_target_amount(&mut self, amount: f64) -> &ConversionState {
        self.conversion = self.conversion.update_from_target(amount);
        &self.conversion
    }

    pub fn select_source_currency(&mut self, symbol: &str) -> &ConversionState {
        self.conversion = self
            .conversion
            .change_source_currency(symbol, &self.prices, &self.defaults);
        &self.conversion
    }

    pub fn select_target_currency(&mut self, symbol: &str) -> &ConversionState {
        self.conversion = self
            .conversion
            .change_target_currency(symbol, &self.prices, &self.defaults);
        &self.conversion
    }

    /// Push the current conversion and wallet rows to the event handler
    pub async fn publish(&self) {
        self.event_handler.handle_conversion(&self.conversion).await;
        self.event_handler.handle_wallet_rows(&self.wallet_rows()).await;
    }
}
