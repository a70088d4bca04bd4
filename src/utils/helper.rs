use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

/// Decimal places kept on derived monetary amounts
pub const AMOUNT_DECIMALS: u32 = 2;

/// Text shown wherever a value cannot be computed
pub const UNAVAILABLE: &str = "unavailable";

/// Round to `decimals` fractional digits, halves away from zero.
///
/// Ties are decided on the shortest decimal form of `value`, so `1.005`
/// rounds to `1.01`. Values outside `Decimal` range use float rounding.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .and_then(|d| {
            d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
        })
        .unwrap_or_else(|| {
            let factor = 10f64.powi(decimals as i32);
            (value * factor).round() / factor
        })
}

/// Round a derived amount to two decimals
pub fn round2(value: f64) -> f64 {
    round_to(value, AMOUNT_DECIMALS)
}

/// Format an amount with no fractional digits
pub fn format_whole(amount: f64) -> String {
    // round first so ties go away from zero rather than to even
    format!("{:.0}", amount.round())
}

/// Format an optional value with two decimals, or the unavailable marker
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => UNAVAILABLE.to_string(),
    }
}

/// Keep only finite numbers
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
