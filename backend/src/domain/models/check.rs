use chrono::{Datelike, NaiveDate};

/// A validated check, ready for formatting.
///
/// Unlike the wire-level `shared::CheckRequest`, every field here has
/// already passed validation: the date is a real calendar date, the amount
/// is numeric and within check bounds, and text fields are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub date: NaiveDate,
    pub payee: String,
    pub address: String,
    pub city_state_zip: String,
    pub amount: f64,
    pub memo_lines: Vec<String>,
}

impl Check {
    /// Check date formatted for printing (MM/DD/YYYY)
    pub fn formatted_date(&self) -> String {
        format!(
            "{:02}/{:02}/{:04}",
            self.date.month(),
            self.date.day(),
            self.date.year()
        )
    }
}
