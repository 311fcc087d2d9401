//! Check service: the high-level operation behind the REST handlers.
//!
//! Orchestrates the full preview pipeline: validate the submitted form,
//! convert the amount to words, pad the words line, and assemble the
//! formatted preview with its plain-text check face.

use anyhow::{Context, Result};
use shared::{CheckPreviewResponse, CheckRequest, CheckValidation};
use tracing::info;

use crate::domain::amount_words;
use crate::domain::check_format::CheckFormatService;
use crate::domain::dates;
use crate::domain::models::check::Check;
use crate::domain::validation::CheckValidationService;

/// Outcome of a preview request
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewOutcome {
    /// The form was valid and the check is ready for printing
    Ready(CheckPreviewResponse),
    /// The form failed validation; nothing was formatted
    Rejected(CheckValidation),
}

/// Check service that orchestrates validation and formatting
#[derive(Clone)]
pub struct CheckService {
    validation: CheckValidationService,
    format: CheckFormatService,
}

impl CheckService {
    /// Create a new CheckService with default collaborators
    pub fn new() -> Self {
        Self {
            validation: CheckValidationService::new(),
            format: CheckFormatService::new(),
        }
    }

    /// Create a new CheckService with custom collaborators
    pub fn with_services(validation: CheckValidationService, format: CheckFormatService) -> Self {
        Self { validation, format }
    }

    /// Field caps and amount bounds enforced by this service
    pub fn limits(&self) -> &shared::CheckLimits {
        self.validation.limits()
    }

    /// Validate a check form without formatting anything
    pub fn validate(&self, request: &CheckRequest) -> CheckValidation {
        self.validation.validate_check(request)
    }

    /// Build a printable check preview from a submitted form.
    ///
    /// Invalid forms come back as `PreviewOutcome::Rejected` with the full
    /// list of field errors; `Err` is reserved for internal failures.
    pub fn preview(&self, request: &CheckRequest) -> Result<PreviewOutcome> {
        info!("Building check preview for payee: {:?}", request.payee);

        let validation = self.validation.validate_check(request);
        if !validation.is_valid {
            info!("Check form rejected with {} error(s)", validation.errors.len());
            return Ok(PreviewOutcome::Rejected(validation));
        }

        let normalized = validation
            .normalized_amount
            .context("valid form is missing its normalized amount")?;
        let amount: f64 = normalized
            .parse()
            .context("normalized amount is not numeric")?;
        let date = dates::parse_check_date(request.date.trim())
            .context("valid form has an unparsable date")?;

        let check = Check {
            date,
            payee: request.payee.trim().to_string(),
            address: self.validation.sanitize_text(request.address.trim()),
            city_state_zip: self.validation.sanitize_text(&request.city_state_zip()),
            amount,
            memo_lines: request
                .memo_lines()
                .iter()
                .map(|line| self.validation.sanitize_text(line))
                .collect(),
        };

        let words = amount_words::amount_to_words(amount)?;
        let amount_in_words = self.format.pad_with_asterisks(&words);
        let rendered_check = self.format.render_check(&check, &amount_in_words);

        Ok(PreviewOutcome::Ready(CheckPreviewResponse {
            formatted_date: check.formatted_date(),
            payee: check.payee,
            address: check.address,
            city_state_zip: check.city_state_zip,
            formatted_amount: self.format.format_amount(amount),
            amount_in_words,
            memo_lines: check.memo_lines,
            requires_confirmation: self.format.requires_confirmation(amount),
            rendered_check,
        }))
    }
}

impl Default for CheckService {
    fn default() -> Self {
        Self::new()
    }
}
