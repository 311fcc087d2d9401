//! # Domain Module
//!
//! Contains all business logic for the check writer.
//!
//! This module encapsulates the rules for turning a submitted check form
//! into a printable check: field validation, amount-in-words conversion,
//! tamper-resistant padding, and plain-text layout rendering. It operates
//! independently of the REST layer and of any print medium.
//!
//! ## Module Organization
//!
//! - **amount_words**: Number-to-words conversion for the amount line
//! - **check_format**: Security padding, currency display, check-face rendering
//! - **validation**: Check form field validation and sanitization
//! - **dates**: Check date parsing, formatting, and form defaults
//! - **check_service**: High-level orchestration behind the REST handlers
//! - **models**: Validated domain representation of a check
//!
//! ## Business Rules
//!
//! - Amounts lie in [0.01, 999999.99] with at most two decimal places
//! - The amount-in-words line is padded with asterisks so nothing can be
//!   appended after the printed amount, and is never truncated
//! - Check dates must be real calendar dates within one year of today
//! - Amounts above the large-amount threshold require user confirmation

pub mod amount_words;
pub mod check_format;
pub mod check_service;
pub mod dates;
pub mod models;
pub mod validation;

pub use check_format::{CheckFormatConfig, CheckFormatService};
pub use check_service::{CheckService, PreviewOutcome};
pub use validation::CheckValidationService;
