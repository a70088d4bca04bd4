use tracing::debug;

use crate::models::{
    balance::{RankedBalance, WalletBalance},
    chain::{is_recognized_priority, ChainPriorities},
    wallet::WalletRow,
};
use crate::traits::price_provider::PriceProvider;
use crate::utils::helper::finite;

/// Keep positive balances on recognized chains, highest priority first.
///
/// `priority_of` runs once per balance. Ties keep their input order.
pub fn rank_balances<F>(balances: &[WalletBalance], priority_of: F) -> Vec<RankedBalance>
where
    F: Fn(&str) -> i32,
{
    let mut ranked: Vec<RankedBalance> = balances
        .iter()
        .filter_map(|balance| {
            let priority = priority_of(&balance.chain);
            if balance.amount > 0.0 && is_recognized_priority(priority) {
                Some(RankedBalance::new(balance.clone(), priority))
            } else {
                debug!(
                    "Excluding {} on {} (amount {}, priority {})",
                    balance.currency, balance.chain, balance.amount, priority
                );
                None
            }
        })
        .collect();

    // stable
    ranked.sort_by(|lhs, rhs| rhs.priority.cmp(&lhs.priority));
    ranked
}

/// Quantity times unit price; `None` when the currency has no usable price
pub fn display_value<P>(balance: &WalletBalance, prices: &P) -> Option<f64>
where
    P: PriceProvider + ?Sized,
{
    prices
        .unit_price(&balance.currency)
        .and_then(|price| finite(price * balance.amount))
}

/// Join ranked balances with their display values
pub fn wallet_rows<P>(ranked: &[RankedBalance], prices: &P) -> Vec<WalletRow>
where
    P: PriceProvider + ?Sized,
{
    ranked
        .iter()
        .map(|entry| WalletRow::new(entry, display_value(&entry.balance, prices)))
        .collect()
}

/// Ranks balances against a chain priority table
#[derive(Debug, Clone, Default)]
pub struct BalanceRanker {
    priorities: ChainPriorities,
}

impl BalanceRanker {
    /// Create a new balance ranker
    pub fn new(priorities: ChainPriorities) -> Self {
        Self { priorities }
    }

    /// Filter and order balances for display
    pub fn rank(&self, balances: &[WalletBalance]) -> Vec<RankedBalance> {
        rank_balances(balances, |chain| self.priorities.priority_of(chain))
    }
}
