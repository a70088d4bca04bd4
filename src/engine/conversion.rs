use tracing::debug;

use crate::traits::price_provider::PriceProvider;
use crate::utils::helper::{finite, round2};

/// Currencies and amount a conversion starts from
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionDefaults {
    pub source_symbol: String,
    pub target_symbol: String,
    pub amount: f64,
}

impl ConversionDefaults {
    pub fn new(source_symbol: impl Into<String>, target_symbol: impl Into<String>, amount: f64) -> Self {
        Self {
            source_symbol: source_symbol.into(),
            target_symbol: target_symbol.into(),
            amount,
        }
    }
}

impl Default for ConversionDefaults {
    fn default() -> Self {
        Self::new("ETH", "BUSD", 1.0)
    }
}

/// Convert `amount` priced at `from_price` into units priced at `to_price`.
///
/// Returns `None` when either price is missing, the target price is zero,
/// or the result is not finite. The result is rounded to two decimals.
pub fn convert(amount: f64, from_price: Option<f64>, to_price: Option<f64>) -> Option<f64> {
    let (from, to) = (from_price?, to_price?);
    if to == 0.0 {
        return None;
    }
    finite(round2(amount * from / to))
}

/// Units of target received for one unit of source
pub fn rate(source_price: Option<f64>, target_price: Option<f64>) -> Option<f64> {
    let (source, target) = (source_price?, target_price?);
    if target == 0.0 {
        return None;
    }
    finite(source / target)
}

/// State of the two-sided conversion calculator.
///
/// Every operation returns a new state; `None` amounts mean the
/// conversion is unavailable, not zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionState {
    pub source_symbol: String,
    pub target_symbol: String,
    pub source_amount: Option<f64>,
    pub target_amount: Option<f64>,
    pub source_unit_price: Option<f64>,
    pub target_unit_price: Option<f64>,
}

impl ConversionState {
    /// State before any price is known
    pub fn new(defaults: &ConversionDefaults) -> Self {
        Self {
            source_symbol: defaults.source_symbol.clone(),
            target_symbol: defaults.target_symbol.clone(),
            source_amount: Some(defaults.amount),
            target_amount: None,
            source_unit_price: None,
            target_unit_price: None,
        }
    }

    /// Select the default currencies against the first price snapshot
    pub fn initialize<P>(defaults: &ConversionDefaults, prices: &P) -> Self
    where
        P: PriceProvider + ?Sized,
    {
        Self::new(defaults)
            .change_source_currency(&defaults.source_symbol, prices, defaults)
            .change_target_currency(&defaults.target_symbol, prices, defaults)
    }

    /// The user typed a source amount
    pub fn update_from_source(&self, amount: f64) -> Self {
        Self {
            source_amount: Some(amount),
            target_amount: convert(amount, self.source_unit_price, self.target_unit_price),
            ..self.clone()
        }
    }

    /// The user typed a target amount
    pub fn update_from_target(&self, amount: f64) -> Self {
        Self {
            source_amount: convert(amount, self.target_unit_price, self.source_unit_price),
            target_amount: Some(amount),
            ..self.clone()
        }
    }

    /// Select a new source currency; unknown symbols leave the state untouched
    pub fn change_source_currency<P>(&self, symbol: &str, prices: &P, defaults: &ConversionDefaults) -> Self
    where
        P: PriceProvider + ?Sized,
    {
        let Some(source_price) = prices.unit_price(symbol) else {
            debug!("Ignoring unknown source currency {}", symbol);
            return self.clone();
        };
        let Some(target_price) = self
            .target_unit_price
            .or_else(|| prices.unit_price(&defaults.target_symbol))
        else {
            debug!("No target price for {}, keeping state", defaults.target_symbol);
            return self.clone();
        };

        Self {
            source_symbol: symbol.to_string(),
            source_unit_price: Some(source_price),
            target_amount: self
                .source_amount
                .and_then(|amount| convert(amount, Some(source_price), Some(target_price))),
            ..self.clone()
        }
    }

    /// Select a new target currency. The target amount is re-derived from
    /// the current source amount.
    pub fn change_target_currency<P>(&self, symbol: &str, prices: &P, defaults: &ConversionDefaults) -> Self
    where
        P: PriceProvider + ?Sized,
    {
        let Some(target_price) = prices.unit_price(symbol) else {
            debug!("Ignoring unknown target currency {}", symbol);
            return self.clone();
        };
        let Some(source_price) = self
            .source_unit_price
            .or_else(|| prices.unit_price(&defaults.source_symbol))
        else {
            debug!("No source price for {}, keeping state", defaults.source_symbol);
            return self.clone();
        };

        Self {
            target_symbol: symbol.to_string(),
            target_unit_price: Some(target_price),
            target_amount: self
                .source_amount
                .and_then(|amount| convert(amount, Some(source_price), Some(target_price))),
            ..self.clone()
        }
    }

    /// Re-derive against a new price snapshot. Symbols missing from the
    /// snapshot keep their previous (stale) unit price.
    pub fn refresh<P>(&self, prices: &P) -> Self
    where
        P: PriceProvider + ?Sized,
    {
        let source_unit_price = match prices.unit_price(&self.source_symbol) {
            Some(price) => Some(price),
            None => {
                debug!("{} missing from snapshot, keeping stale price", self.source_symbol);
                self.source_unit_price
            }
        };
        let target_unit_price = match prices.unit_price(&self.target_symbol) {
            Some(price) => Some(price),
            None => {
                debug!("{} missing from snapshot, keeping stale price", self.target_symbol);
                self.target_unit_price
            }
        };

        let next = Self {
            source_unit_price,
            target_unit_price,
            ..self.clone()
        };
        match (self.source_amount, self.target_amount) {
            (Some(amount), _) => next.update_from_source(amount),
            (None, Some(amount)) => next.update_from_target(amount),
            (None, None) => next,
        }
    }

    /// Units of target per unit of source
    pub fn rate(&self) -> Option<f64> {
        rate(self.source_unit_price, self.target_unit_price)
    }
}
