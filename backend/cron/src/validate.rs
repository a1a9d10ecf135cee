//! Whole-expression validation: exactly 5 fields, checked in fixed order,
//! first failing field wins.

use serde::Serialize;
use tracing::debug;

use crate::field::{check_field, FIELD_SPECS};

/// Validation outcome. Malformed input is a reported result, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    fn invalid(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into() }
    }
}

/// Validate a 5-field cron expression (minute hour day month day-of-week).
///
/// Structural problems (empty input, wrong field count) short-circuit
/// before any field is examined; field problems short-circuit at the
/// first offending field, with its display label prefixed.
pub fn validate(expression: &str) -> Validation {
    if expression.trim().is_empty() {
        return Validation::invalid("Cron式が空です");
    }

    let parts: Vec<&str> = expression.split_whitespace().collect();
    if parts.len() != 5 {
        return Validation::invalid("Cron式は5つのフィールドが必要です (分 時 日 月 曜日)");
    }

    for (part, spec) in parts.iter().zip(FIELD_SPECS.iter()) {
        if let Err(err) = check_field(part, spec.min, spec.max) {
            debug!(field = spec.label, value = *part, "cron field rejected");
            return Validation::invalid(format!("{}: {}", spec.label, err));
        }
    }

    Validation { valid: true, message: "Cron式は有効です".to_string() }
}
