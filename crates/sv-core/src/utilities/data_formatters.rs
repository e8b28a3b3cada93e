//! Data formatting helpers.
//!
//! Attributes and exact results are rendered with Rust's shortest
//! round-trip representation (`5.0` → `"5"`, `2.5` → `"2.5"`); rounded
//! results use a fixed number of decimals.

use crate::Real;

/// Format a real number with the given number of decimal places.
pub fn format_real(value: Real, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a real number exactly, without trailing zeros (`200.0` → `"200"`).
pub fn format_exact(value: Real) -> String {
    format!("{value}")
}

/// Format a `width × height` pair as `"WxH"` (e.g. `10`, `20` → `"10x20"`).
pub fn format_dimensions(width: Real, height: Real) -> String {
    format!("{}x{}", format_exact(width), format_exact(height))
}

/// Upper-case the first character of `s` (`"circle"` → `"Circle"`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
