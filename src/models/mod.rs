//! Data models for prices, balances and wallet rows

pub mod balance;
pub mod chain;
pub mod price;
pub mod wallet;

// Re-export for convenience
pub use balance::{parse_balances, RankedBalance, WalletBalance};
pub use chain::{is_recognized_priority, ChainPriorities, UNKNOWN_CHAIN_PRIORITY};
pub use price::{parse_price_feed, PricedAsset};
pub use wallet::WalletRow;
