//! Seams between the core and its collaborators

pub mod event_handler;
pub mod feed_provider;
pub mod price_provider;

// Re-export for convenience
pub use event_handler::QuoteEventHandler;
pub use feed_provider::{BalanceProvider, PriceFeedProvider};
pub use price_provider::PriceProvider;
