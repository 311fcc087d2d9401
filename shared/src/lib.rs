use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Check form data as submitted by the client.
///
/// All fields arrive as raw strings; the backend validates and normalizes
/// them before any formatting happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Check date in ISO 8601 format (YYYY-MM-DD)
    pub date: String,
    /// Payee name ("Pay to the Order of")
    pub payee: String,
    /// Street address (optional)
    pub address: String,
    /// City (optional)
    pub city: String,
    /// Two-letter state code (optional)
    pub state: String,
    /// ZIP code (optional)
    pub zip_code: String,
    /// Amount as entered, e.g. "1234.56"
    pub amount: String,
    /// Memo text, may contain multiple lines (optional)
    pub memo: String,
}

impl Default for CheckRequest {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            date: format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day()),
            payee: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            amount: String::new(),
            memo: String::new(),
        }
    }
}

impl CheckRequest {
    /// Join city, state and ZIP into a single display line.
    ///
    /// City and state are separated by ", "; the ZIP is appended after a
    /// space only when a city or state precedes it.
    pub fn city_state_zip(&self) -> String {
        let city = self.city.trim();
        let state = self.state.trim();
        let zip = self.zip_code.trim();

        let mut line = String::new();
        line.push_str(city);
        if !city.is_empty() && !state.is_empty() {
            line.push_str(", ");
        }
        line.push_str(state);
        if !zip.is_empty() && (!city.is_empty() || !state.is_empty()) {
            line.push(' ');
        }
        line.push_str(zip);
        line
    }

    /// Split the memo into lines for multi-line rendering.
    pub fn memo_lines(&self) -> Vec<String> {
        if self.memo.is_empty() {
            return Vec::new();
        }
        self.memo.split('\n').map(|line| line.to_string()).collect()
    }
}

/// Fully formatted check data ready for the print layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckPreviewResponse {
    /// Check date formatted as MM/DD/YYYY
    pub formatted_date: String,
    pub payee: String,
    /// Street address line (empty when not provided)
    pub address: String,
    /// Joined city/state/ZIP line (empty when not provided)
    pub city_state_zip: String,
    /// Numeric amount with currency symbol and separators, e.g. "$1,234.56"
    pub formatted_amount: String,
    /// Amount in words, asterisk-padded against tampering
    pub amount_in_words: String,
    pub memo_lines: Vec<String>,
    /// True when the amount exceeds the large-amount threshold and the
    /// client should ask the user to confirm before printing
    pub requires_confirmation: bool,
    /// Plain-text rendering of the check face
    pub rendered_check: String,
}

/// Validation result for a submitted check form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckValidation {
    pub is_valid: bool,
    pub errors: Vec<CheckValidationError>,
    /// User-facing message for each entry in `errors`, in the same order
    pub messages: Vec<String>,
    /// Amount normalized to exactly two decimal places, when valid
    pub normalized_amount: Option<String>,
}

/// Specific validation errors for check form fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CheckValidationError {
    EmptyPayee,
    PayeeTooLong(usize),
    SuspiciousPayee,
    EmptyAmount,
    InvalidAmountFormat,
    AmountTooSmall(f64),
    AmountTooLarge(f64),
    EmptyDate,
    InvalidDateFormat,
    DateTooFarInPast,
    DateTooFarInFuture,
    AddressTooLong(usize),
    CityTooLong(usize),
    StateTooLong(usize),
    ZipCodeTooLong(usize),
    MemoTooLong(usize),
}

/// Field caps and amount bounds for the check form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckLimits {
    pub payee_max_length: usize,
    pub address_max_length: usize,
    pub city_max_length: usize,
    pub state_max_length: usize,
    pub zip_max_length: usize,
    pub memo_max_length: usize,
    pub amount_min: f64,
    pub amount_max: f64,
}

impl Default for CheckLimits {
    fn default() -> Self {
        Self {
            payee_max_length: 150,
            address_max_length: 200,
            city_max_length: 50,
            state_max_length: 2,
            zip_max_length: 10,
            memo_max_length: 100,
            amount_min: 0.01,
            amount_max: 999_999.99,
        }
    }
}

/// Current date information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: u32,
    pub day: u32,
    pub formatted_date: String, // e.g., "08/07/2026"
    pub iso_date: String,       // e.g., "2026-08-07"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_location(city: &str, state: &str, zip: &str) -> CheckRequest {
        CheckRequest {
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip.to_string(),
            ..CheckRequest::default()
        }
    }

    #[test]
    fn test_city_state_zip_full() {
        let request = request_with_location("Springfield", "IL", "62704");
        assert_eq!(request.city_state_zip(), "Springfield, IL 62704");
    }

    #[test]
    fn test_city_state_zip_partial() {
        // City only
        let request = request_with_location("Springfield", "", "");
        assert_eq!(request.city_state_zip(), "Springfield");

        // State and ZIP without city
        let request = request_with_location("", "IL", "62704");
        assert_eq!(request.city_state_zip(), "IL 62704");

        // ZIP alone gets no separator
        let request = request_with_location("", "", "62704");
        assert_eq!(request.city_state_zip(), "62704");

        // City and ZIP without state
        let request = request_with_location("Springfield", "", "62704");
        assert_eq!(request.city_state_zip(), "Springfield 62704");
    }

    #[test]
    fn test_city_state_zip_empty() {
        let request = request_with_location("", "", "");
        assert_eq!(request.city_state_zip(), "");
    }

    #[test]
    fn test_memo_lines() {
        let mut request = CheckRequest::default();
        assert!(request.memo_lines().is_empty());

        request.memo = "Rent".to_string();
        assert_eq!(request.memo_lines(), vec!["Rent"]);

        request.memo = "Rent\nAugust 2026".to_string();
        assert_eq!(request.memo_lines(), vec!["Rent", "August 2026"]);
    }

    #[test]
    fn test_default_date_is_iso_formatted() {
        let request = CheckRequest::default();
        let parts: Vec<&str> = request.date.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4); // Year
        assert_eq!(parts[1].len(), 2); // Month (padded)
        assert_eq!(parts[2].len(), 2); // Day (padded)
    }

    #[test]
    fn test_check_request_round_trips_through_json() {
        let request = CheckRequest {
            date: "2026-08-07".to_string(),
            payee: "ACME Corp.".to_string(),
            address: "123 Main St.".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
            amount: "1234.56".to_string(),
            memo: "Invoice #42".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        let parsed: CheckRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_check_limits_defaults() {
        let limits = CheckLimits::default();

        assert_eq!(limits.payee_max_length, 150);
        assert_eq!(limits.address_max_length, 200);
        assert_eq!(limits.city_max_length, 50);
        assert_eq!(limits.state_max_length, 2);
        assert_eq!(limits.zip_max_length, 10);
        assert_eq!(limits.memo_max_length, 100);
        assert_eq!(limits.amount_min, 0.01);
        assert_eq!(limits.amount_max, 999_999.99);
    }
}
