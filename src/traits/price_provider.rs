use std::collections::HashMap;

/// Source of latest unit prices, keyed by symbol
pub trait PriceProvider {
    /// Unit price for a symbol, if quoted
    fn unit_price(&self, symbol: &str) -> Option<f64>;

    /// Unit prices for several symbols, in request order
    fn unit_prices(&self, symbols: &[&str]) -> Vec<Option<f64>> {
        symbols.iter().map(|symbol| self.unit_price(symbol)).collect()
    }
}

impl PriceProvider for HashMap<String, f64> {
    fn unit_price(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

impl<P: PriceProvider + ?Sized> PriceProvider for &P {
    fn unit_price(&self, symbol: &str) -> Option<f64> {
        (**self).unit_price(symbol)
    }
}
