//! Token Quote Library
//!
//! Converts amounts between tokens over a latest-snapshot price table and
//! ranks wallet balances for display.

// Public modules - these are the API surface
pub mod config;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod tracker;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::AppConfig;
pub use engine::{
    conversion::{convert, rate, ConversionDefaults, ConversionState},
    ranker::{display_value, rank_balances, wallet_rows, BalanceRanker},
};
pub use handlers::{composite::CompositeEventHandler, console::ConsoleEventHandler};
pub use models::{
    balance::{parse_balances, RankedBalance, WalletBalance},
    chain::{ChainPriorities, UNKNOWN_CHAIN_PRIORITY},
    price::{parse_price_feed, PricedAsset},
    wallet::WalletRow,
};
pub use providers::{
    file_provider::{FileBalanceProvider, FilePriceFeed},
    icon_provider::TokenIcons,
    price_table::PriceTable,
    static_provider::{StaticBalanceProvider, StaticPriceFeed},
};
pub use tracker::quote_session::QuoteSession;
pub use traits::{
    event_handler::QuoteEventHandler,
    feed_provider::{BalanceProvider, PriceFeedProvider},
    price_provider::PriceProvider,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
