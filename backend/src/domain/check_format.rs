//! Check formatting logic: security padding, currency display, and the
//! plain-text check face.
//!
//! The amount-in-words line is padded with asterisks so nothing can be
//! written after the printed amount. Formatting is configuration driven so
//! different check stock can adjust the line width without touching the
//! domain logic.

use serde::{Deserialize, Serialize};

use crate::domain::models::check::Check;

/// Configuration for check formatting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckFormatConfig {
    /// Maximum characters on the amount-in-words line
    pub amount_line_max_length: usize,
    /// Amounts above this value should be confirmed before printing
    pub large_amount_threshold: f64,
    pub currency_symbol: String,
}

impl Default for CheckFormatConfig {
    fn default() -> Self {
        Self {
            amount_line_max_length: 80,
            large_amount_threshold: 10_000.0,
            currency_symbol: "$".to_string(),
        }
    }
}

/// Check formatting service that handles all presentation-string concerns
#[derive(Clone)]
pub struct CheckFormatService {
    config: CheckFormatConfig,
}

impl CheckFormatService {
    /// Create a new CheckFormatService with default configuration
    pub fn new() -> Self {
        Self {
            config: CheckFormatConfig::default(),
        }
    }

    /// Create a new CheckFormatService with custom configuration
    pub fn with_config(config: CheckFormatConfig) -> Self {
        Self { config }
    }

    /// Pad text with asterisks to fill the amount line.
    ///
    /// A phrase shorter than the line width gets one separating space plus
    /// enough asterisks to reach the width, so the padded output is one
    /// character longer than the width itself. A phrase at or beyond the
    /// width is returned unchanged; the legal amount text is never
    /// truncated. Empty input stays empty.
    pub fn pad_with_asterisks(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let max_length = self.config.amount_line_max_length;
        if text.len() >= max_length {
            return text.to_string();
        }

        let pad_count = max_length - text.len();
        format!("{} {}", text, "*".repeat(pad_count))
    }

    /// Format an amount with currency symbol and thousands separators
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{}", self.config.currency_symbol, format_with_separators(amount.abs()))
    }

    /// Whether the amount is large enough to warrant a confirmation prompt
    pub fn requires_confirmation(&self, amount: f64) -> bool {
        amount > self.config.large_amount_threshold
    }

    /// Render the check face as plain text for the print layout.
    ///
    /// Field order follows the printed check: date, payee block, numeric
    /// amount, amount-in-words line (already padded), then memo lines.
    pub fn render_check(&self, check: &Check, amount_in_words: &str) -> String {
        let mut lines = Vec::new();
        lines.push(format!("Date: {}", check.formatted_date()));
        lines.push(format!("Pay to the Order of: {}", check.payee));
        if !check.address.is_empty() {
            lines.push(check.address.clone());
        }
        if !check.city_state_zip.is_empty() {
            lines.push(check.city_state_zip.clone());
        }
        lines.push(format!("Amount: {}", self.format_amount(check.amount)));
        lines.push(amount_in_words.to_string());
        for memo_line in &check.memo_lines {
            lines.push(format!("Memo: {}", memo_line));
        }
        lines.join("\n")
    }
}

impl Default for CheckFormatService {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a non-negative dollar value with thousands separators and exactly
/// two decimal places, e.g. 1234.5 becomes "1,234.50".
pub fn format_with_separators(amount: f64) -> String {
    let total_cents = (amount * 100.0).round() as u64;
    format!("{}.{:02}", group_thousands(total_cents / 100), total_cents % 100)
}

fn group_thousands(value: u64) -> String {
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
