use std::collections::HashMap;

use tracing::debug;

use crate::models::price::PricedAsset;
use crate::traits::price_provider::PriceProvider;

/// Latest-snapshot price lookup keyed by symbol.
///
/// Built once per feed snapshot and never mutated; a new snapshot
/// replaces the table wholly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    assets: HashMap<String, PricedAsset>,
    // first-seen order, used for listing
    symbols: Vec<String>,
}

impl PriceTable {
    /// Build from a raw feed. The first record per symbol wins.
    pub fn build<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = PricedAsset>,
    {
        let mut assets = HashMap::new();
        let mut symbols = Vec::new();
        let mut discarded = 0usize;

        for asset in raw {
            if assets.contains_key(&asset.symbol) {
                discarded += 1;
                continue;
            }
            symbols.push(asset.symbol.clone());
            assets.insert(asset.symbol.clone(), asset);
        }

        debug!(
            "Built price table with {} symbols ({} duplicates discarded)",
            symbols.len(),
            discarded
        );

        Self { assets, symbols }
    }

    /// Record for a symbol, if quoted
    pub fn lookup(&self, symbol: &str) -> Option<&PricedAsset> {
        self.assets.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.assets.contains_key(symbol)
    }

    /// Distinct symbols in first-seen order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Records in first-seen order
    pub fn assets(&self) -> impl Iterator<Item = &PricedAsset> {
        self.symbols.iter().filter_map(|symbol| self.assets.get(symbol))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl PriceProvider for PriceTable {
    fn unit_price(&self, symbol: &str) -> Option<f64> {
        self.lookup(symbol).map(|asset| asset.unit_price)
    }
}

impl FromIterator<PricedAsset> for PriceTable {
    fn from_iter<I: IntoIterator<Item = PricedAsset>>(iter: I) -> Self {
        Self::build(iter)
    }
}
