//! Check form validation.
//!
//! All form fields arrive as raw strings and every rule is checked here,
//! before any formatting happens. Field failures are accumulated as data
//! (`CheckValidation`) rather than raised as errors, so a client can show
//! every problem at once. Amounts that pass validation come back normalized
//! to exactly two decimal places.

use shared::{CheckLimits, CheckRequest, CheckValidation, CheckValidationError};

use crate::domain::{check_format, dates};

/// Markers that indicate markup or script injection attempts
const SUSPICIOUS_PATTERNS: [&str; 4] = ["<script", "javascript:", "<iframe", "<img"];

/// Check validation service that enforces all form-field business rules
#[derive(Clone)]
pub struct CheckValidationService {
    limits: CheckLimits,
}

impl CheckValidationService {
    /// Create a new CheckValidationService with default limits
    pub fn new() -> Self {
        Self {
            limits: CheckLimits::default(),
        }
    }

    /// Create a new CheckValidationService with custom limits
    pub fn with_limits(limits: CheckLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &CheckLimits {
        &self.limits
    }

    /// Strip HTML tags from text, keeping the content between them
    pub fn sanitize_text(&self, text: &str) -> String {
        let mut sanitized = String::with_capacity(text.len());
        let mut in_tag = false;
        for ch in text.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => sanitized.push(ch),
                _ => {}
            }
        }
        sanitized
    }

    /// Validate and normalize a monetary amount string.
    ///
    /// Accepts digits with an optional decimal point and at most two
    /// decimal digits; the value must lie within the configured bounds.
    /// Success yields the amount normalized to exactly two decimals.
    pub fn validate_amount(&self, amount: &str) -> Result<String, CheckValidationError> {
        let trimmed = amount.trim();
        if trimmed.is_empty() {
            return Err(CheckValidationError::EmptyAmount);
        }
        if !is_amount_format(trimmed) {
            return Err(CheckValidationError::InvalidAmountFormat);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| CheckValidationError::InvalidAmountFormat)?;

        if value < self.limits.amount_min {
            return Err(CheckValidationError::AmountTooSmall(self.limits.amount_min));
        }
        if value > self.limits.amount_max {
            return Err(CheckValidationError::AmountTooLarge(self.limits.amount_max));
        }

        Ok(format!("{:.2}", value))
    }

    /// Validate a payee name
    pub fn validate_payee(&self, payee: &str) -> Option<CheckValidationError> {
        let trimmed = payee.trim();
        if trimmed.is_empty() {
            return Some(CheckValidationError::EmptyPayee);
        }

        let length = trimmed.chars().count();
        if length > self.limits.payee_max_length {
            return Some(CheckValidationError::PayeeTooLong(length));
        }

        let lowered = trimmed.to_lowercase();
        if SUSPICIOUS_PATTERNS.iter().any(|pattern| lowered.contains(pattern))
            || has_event_handler(&lowered)
        {
            return Some(CheckValidationError::SuspiciousPayee);
        }

        None
    }

    /// Validate a check date: a real ISO date within one year of today
    pub fn validate_date(&self, date: &str) -> Option<CheckValidationError> {
        use chrono::Datelike;

        let trimmed = date.trim();
        if trimmed.is_empty() {
            return Some(CheckValidationError::EmptyDate);
        }

        let parsed = match dates::parse_check_date(trimmed) {
            Some(date) => date,
            None => return Some(CheckValidationError::InvalidDateFormat),
        };

        let today = chrono::Local::now().date_naive();
        let one_year_ago = today
            .with_year(today.year() - 1)
            .unwrap_or(today - chrono::Duration::days(365));
        let one_year_ahead = today
            .with_year(today.year() + 1)
            .unwrap_or(today + chrono::Duration::days(365));

        if parsed < one_year_ago {
            return Some(CheckValidationError::DateTooFarInPast);
        }
        if parsed > one_year_ahead {
            return Some(CheckValidationError::DateTooFarInFuture);
        }

        None
    }

    /// Validate a full check form, accumulating every field failure
    pub fn validate_check(&self, request: &CheckRequest) -> CheckValidation {
        let mut errors = Vec::new();

        if let Some(error) = self.validate_payee(&request.payee) {
            errors.push(error);
        }

        let normalized_amount = match self.validate_amount(&request.amount) {
            Ok(normalized) => Some(normalized),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        if let Some(error) = self.validate_date(&request.date) {
            errors.push(error);
        }

        if let Some(length) = exceeds(&request.address, self.limits.address_max_length) {
            errors.push(CheckValidationError::AddressTooLong(length));
        }
        if let Some(length) = exceeds(&request.city, self.limits.city_max_length) {
            errors.push(CheckValidationError::CityTooLong(length));
        }
        if let Some(length) = exceeds(&request.state, self.limits.state_max_length) {
            errors.push(CheckValidationError::StateTooLong(length));
        }
        if let Some(length) = exceeds(&request.zip_code, self.limits.zip_max_length) {
            errors.push(CheckValidationError::ZipCodeTooLong(length));
        }
        if let Some(length) = exceeds(&request.memo, self.limits.memo_max_length) {
            errors.push(CheckValidationError::MemoTooLong(length));
        }

        let messages = self.error_messages(&errors);
        CheckValidation {
            is_valid: errors.is_empty(),
            errors,
            messages,
            normalized_amount,
        }
    }

    /// Get user-facing error message for a validation error
    pub fn error_message(&self, error: &CheckValidationError) -> String {
        match error {
            CheckValidationError::EmptyPayee => "Payee name is required".to_string(),
            CheckValidationError::PayeeTooLong(_) => format!(
                "Payee name cannot exceed {} characters",
                self.limits.payee_max_length
            ),
            CheckValidationError::SuspiciousPayee => {
                "Payee name contains invalid characters or patterns".to_string()
            }
            CheckValidationError::EmptyAmount => "Amount is required".to_string(),
            CheckValidationError::InvalidAmountFormat => {
                "Amount must be a valid number with up to 2 decimal places".to_string()
            }
            CheckValidationError::AmountTooSmall(min) => {
                format!("Amount must be at least ${}", check_format::format_with_separators(*min))
            }
            CheckValidationError::AmountTooLarge(max) => {
                format!("Amount cannot exceed ${}", check_format::format_with_separators(*max))
            }
            CheckValidationError::EmptyDate => "Date is required".to_string(),
            CheckValidationError::InvalidDateFormat => "Invalid date format".to_string(),
            CheckValidationError::DateTooFarInPast => {
                "Date cannot be more than 1 year in the past".to_string()
            }
            CheckValidationError::DateTooFarInFuture => {
                "Date cannot be more than 1 year in the future".to_string()
            }
            CheckValidationError::AddressTooLong(_) => format!(
                "Address cannot exceed {} characters",
                self.limits.address_max_length
            ),
            CheckValidationError::CityTooLong(_) => {
                format!("City cannot exceed {} characters", self.limits.city_max_length)
            }
            CheckValidationError::StateTooLong(_) => {
                format!("State cannot exceed {} characters", self.limits.state_max_length)
            }
            CheckValidationError::ZipCodeTooLong(_) => {
                format!("ZIP code cannot exceed {} characters", self.limits.zip_max_length)
            }
            CheckValidationError::MemoTooLong(_) => {
                format!("Memo cannot exceed {} characters", self.limits.memo_max_length)
            }
        }
    }

    /// Get all validation error messages as a list
    pub fn error_messages(&self, errors: &[CheckValidationError]) -> Vec<String> {
        errors.iter().map(|error| self.error_message(error)).collect()
    }
}

impl Default for CheckValidationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Digits with an optional decimal point and at most two decimal digits
fn is_amount_format(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match fraction {
        Some(fraction) => fraction.len() <= 2 && fraction.chars().all(|c| c.is_ascii_digit()),
        None => true,
    }
}

/// Matches event-handler attributes like onerror= or onclick=
fn has_event_handler(lowered: &str) -> bool {
    let bytes = lowered.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start..].starts_with(b"on") {
            continue;
        }
        let mut end = start + 2;
        while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
            end += 1;
        }
        if end > start + 2 && end < bytes.len() && bytes[end] == b'=' {
            return true;
        }
    }
    false
}

fn exceeds(value: &str, max_length: usize) -> Option<usize> {
    let length = value.trim().chars().count();
    if length > max_length {
        Some(length)
    } else {
        None
    }
}
