//! Rounding and formatting helpers

pub mod helper;

pub use helper::{format_value, format_whole, round2, round_to, UNAVAILABLE};
