use serde::Serialize;

use super::balance::RankedBalance;
use crate::utils::helper::{format_value, truncate_string};

/// One display row of the wallet, keyed by currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletRow {
    pub key: String,
    pub chain: String,
    pub amount: f64,
    pub formatted_amount: String,
    pub priority: i32,
    pub usd_value: Option<f64>,
}

impl WalletRow {
    /// Join a ranked balance with its display value
    pub fn new(ranked: &RankedBalance, usd_value: Option<f64>) -> Self {
        Self {
            key: ranked.key().to_string(),
            chain: ranked.balance.chain.clone(),
            amount: ranked.amount(),
            formatted_amount: ranked.formatted_amount.clone(),
            priority: ranked.priority,
            usd_value,
        }
    }

    /// Display value text; never renders a missing value as zero
    pub fn formatted_usd_value(&self) -> String {
        format_value(self.usd_value)
    }
}

/// Sum of the known display values, and how many rows had none
pub fn total_value(rows: &[WalletRow]) -> (f64, usize) {
    rows.iter().fold((0.0, 0), |(total, missing), row| match row.usd_value {
        Some(value) if value.is_finite() => (total + value, missing),
        _ => (total, missing + 1),
    })
}

/// Plain-text table of the rows
pub fn format_rows(rows: &[WalletRow]) -> String {
    if rows.is_empty() {
        return "No balances to display".to_string();
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:<10} {:<10} {:>14} {:>16}",
        "CURRENCY", "CHAIN", "AMOUNT", "VALUE"
    ));
    for row in rows {
        lines.push(format!(
            "{:<10} {:<10} {:>14} {:>16}",
            truncate_string(&row.key, 10),
            truncate_string(&row.chain, 10),
            row.formatted_amount,
            row.formatted_usd_value()
        ));
    }

    let (total, missing) = total_value(rows);
    if missing > 0 {
        lines.push(format!("Total: {:.2} ({} without price)", total, missing));
    } else {
        lines.push(format!("Total: {:.2}", total));
    }

    lines.join("\n")
}
