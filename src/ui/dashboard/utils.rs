//! Dashboard utility functions
//!
//! Contains formatting helpers used across dashboard components

use crate::consts::cli_consts::CURRENCY_PREFIX;
use crate::data::TransactionType;
use ratatui::prelude::Color;
use std::str::FromStr;

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Grouped numeral, prefixed with the currency label when `as_currency` is set.
pub fn format_value(value: u64, as_currency: bool) -> String {
    if as_currency {
        format!("{} {}", CURRENCY_PREFIX, group_thousands(value))
    } else {
        group_thousands(value)
    }
}

/// Short bar label that fits a narrow bar: `65000` -> `65k`.
pub fn compact_amount(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{}k", value / 1_000)
    } else {
        value.to_string()
    }
}

/// Badge class for a transaction, e.g. `status-deposit`.
pub fn status_class(kind: TransactionType) -> String {
    format!("status-{}", kind.to_string().to_lowercase())
}

/// Parse a `#RRGGBB` colour, falling back to gray for anything else.
pub fn hex_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::Gray)
}
