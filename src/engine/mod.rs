//! Conversion and ranking core

pub mod conversion;
pub mod ranker;

// Re-export for convenience
pub use conversion::{ConversionDefaults, ConversionState};
pub use ranker::{display_value, rank_balances, wallet_rows, BalanceRanker};
