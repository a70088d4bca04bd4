use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::utils::helper::format_whole;

/// One balance line from the wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    #[serde(alias = "blockchain")]
    pub chain: String,
}

impl WalletBalance {
    /// Create a new wallet balance
    pub fn new(currency: impl Into<String>, amount: f64, chain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            chain: chain.into(),
        }
    }
}

/// Balance annotated for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBalance {
    #[serde(flatten)]
    pub balance: WalletBalance,
    pub priority: i32,
    pub formatted_amount: String,
}

impl RankedBalance {
    /// Annotate a balance with an already computed priority
    pub fn new(balance: WalletBalance, priority: i32) -> Self {
        let formatted_amount = format_whole(balance.amount);
        Self {
            balance,
            priority,
            formatted_amount,
        }
    }

    /// Stable identity for list rendering
    pub fn key(&self) -> &str {
        &self.balance.currency
    }

    pub fn amount(&self) -> f64 {
        self.balance.amount
    }
}

/// Parse a balance list. Records without a string `chain` are rejected.
pub fn parse_balances(json: &str) -> anyhow::Result<Vec<WalletBalance>> {
    serde_json::from_str(json).context("Invalid wallet balance list")
}
