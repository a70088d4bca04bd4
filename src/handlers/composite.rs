use std::sync::Arc;
use async_trait::async_trait;

use crate::engine::conversion::ConversionState;
use crate::models::wallet::WalletRow;
use crate::traits::event_handler::QuoteEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn QuoteEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn QuoteEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteEventHandler for CompositeEventHandler {
    async fn handle_conversion(&self, state: &ConversionState) {
        for handler in &self.handlers {
            handler.handle_conversion(state).await;
        }
    }

    async fn handle_wallet_rows(&self, rows: &[WalletRow]) {
        for handler in &self.handlers {
            handler.handle_wallet_rows(rows).await;
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}
