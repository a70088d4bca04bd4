//! Price lookup, feeds and icon resolution

pub mod file_provider;
pub mod icon_provider;
pub mod price_table;
pub mod static_provider;

// Re-export for convenience
pub use file_provider::{FileBalanceProvider, FilePriceFeed};
pub use icon_provider::TokenIcons;
pub use price_table::PriceTable;
pub use static_provider::{StaticBalanceProvider, StaticPriceFeed};
