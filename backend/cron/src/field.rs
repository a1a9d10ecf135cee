//! Per-field cron grammar: token classification and range checking.
//!
//! A field is classified into exactly one syntactic kind first, then the
//! numeric values of that kind are checked against the field's bounds.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static STEP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*/\d+$").unwrap());
static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+-\d+$").unwrap());
pub(crate) static LIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(,\d+)*$").unwrap());

/// Bounds and display label for one of the 5 cron fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
}

/// The 5 cron fields in expression order.
pub const FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec { min: 0, max: 59, label: "分" },   // minute
    FieldSpec { min: 0, max: 23, label: "時" },   // hour
    FieldSpec { min: 1, max: 31, label: "日" },   // day of month
    FieldSpec { min: 1, max: 12, label: "月" },   // month
    FieldSpec { min: 0, max: 7, label: "曜日" },  // day of week (0 and 7 both = Sunday)
];

/// Syntactic kind of a single cron field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `*`
    Wildcard,
    /// `*/N`
    Step(u32),
    /// `A-B`
    Range(u32, u32),
    /// `A,B,C`
    List(Vec<u32>),
    /// Bare number — a degenerate one-element list.
    Single(u32),
    /// Matches none of the recognized patterns.
    Malformed,
}

/// Validation failure for a single field. `Display` carries the message
/// shown in the console; the field label is attached by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("ステップ値が範囲外です (1-{max})")]
    StepOutOfRange { max: u32 },
    #[error("範囲が無効です ({min}-{max})")]
    InvalidRange { min: u32, max: u32 },
    #[error("値が範囲外です ({min}-{max})")]
    ValueOutOfRange { min: u32, max: u32 },
    #[error("無効な形式です")]
    Malformed,
}

/// Numbers too large for u32 saturate so the bound check rejects them.
fn parse_num(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

/// Classify a raw field into its token kind. First match wins.
pub fn classify(raw: &str) -> FieldKind {
    if raw == "*" {
        return FieldKind::Wildcard;
    }
    if STEP_RE.is_match(raw) {
        let (_, step) = raw.split_once('/').unwrap_or(("", "0"));
        return FieldKind::Step(parse_num(step));
    }
    if RANGE_RE.is_match(raw) {
        let (start, end) = raw.split_once('-').unwrap_or(("0", "0"));
        return FieldKind::Range(parse_num(start), parse_num(end));
    }
    if LIST_RE.is_match(raw) {
        if raw.contains(',') {
            return FieldKind::List(raw.split(',').map(parse_num).collect());
        }
        return FieldKind::Single(parse_num(raw));
    }
    FieldKind::Malformed
}

/// Check whether a cron field is valid within `[min, max]`.
///
/// The step upper bound deliberately reuses `max` (so `*/23` is legal
/// for the hour field), and ranges are strict: `A-B` requires `A < B`.
pub fn check_field(raw: &str, min: u32, max: u32) -> Result<(), FieldError> {
    match classify(raw) {
        FieldKind::Wildcard => Ok(()),
        FieldKind::Step(n) => {
            if n < 1 || n > max {
                return Err(FieldError::StepOutOfRange { max });
            }
            Ok(())
        }
        FieldKind::Range(start, end) => {
            if start < min || end > max || start >= end {
                return Err(FieldError::InvalidRange { min, max });
            }
            Ok(())
        }
        FieldKind::List(values) => {
            for v in values {
                if v < min || v > max {
                    return Err(FieldError::ValueOutOfRange { min, max });
                }
            }
            Ok(())
        }
        FieldKind::Single(v) => {
            if v < min || v > max {
                return Err(FieldError::ValueOutOfRange { min, max });
            }
            Ok(())
        }
        FieldKind::Malformed => Err(FieldError::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_kind() {
        assert_eq!(classify("*"), FieldKind::Wildcard);
        assert_eq!(classify("*/5"), FieldKind::Step(5));
        assert_eq!(classify("1-5"), FieldKind::Range(1, 5));
        assert_eq!(classify("1,3,5"), FieldKind::List(vec![1, 3, 5]));
        assert_eq!(classify("30"), FieldKind::Single(30));
    }

    #[test]
    fn classifies_garbage_as_malformed() {
        for raw in ["", "a", "1-", "-5", "*/", "1,", ",1", "1,,2", "1 - 5", "5/2", "*,1"] {
            assert_eq!(classify(raw), FieldKind::Malformed, "raw: {raw:?}");
        }
    }

    #[test]
    fn wildcard_skips_bound_check() {
        assert!(check_field("*", 1, 12).is_ok());
    }

    #[test]
    fn step_bounded_by_field_max() {
        assert!(check_field("*/1", 0, 23).is_ok());
        assert!(check_field("*/23", 0, 23).is_ok());
        assert_eq!(
            check_field("*/24", 0, 23),
            Err(FieldError::StepOutOfRange { max: 23 })
        );
        assert_eq!(
            check_field("*/0", 0, 23),
            Err(FieldError::StepOutOfRange { max: 23 })
        );
    }

    #[test]
    fn range_is_strict() {
        assert!(check_field("1-5", 0, 7).is_ok());
        assert_eq!(
            check_field("5-3", 0, 59),
            Err(FieldError::InvalidRange { min: 0, max: 59 })
        );
        assert_eq!(
            check_field("3-3", 0, 59),
            Err(FieldError::InvalidRange { min: 0, max: 59 })
        );
        assert_eq!(
            check_field("0-60", 0, 59),
            Err(FieldError::InvalidRange { min: 0, max: 59 })
        );
    }

    #[test]
    fn list_checks_every_value() {
        assert!(check_field("0,15,30,45", 0, 59).is_ok());
        assert_eq!(
            check_field("0,15,60", 0, 59),
            Err(FieldError::ValueOutOfRange { min: 0, max: 59 })
        );
    }

    #[test]
    fn single_value_bounds() {
        assert!(check_field("0", 0, 59).is_ok());
        assert!(check_field("59", 0, 59).is_ok());
        assert_eq!(
            check_field("0", 1, 31),
            Err(FieldError::ValueOutOfRange { min: 1, max: 31 })
        );
    }

    #[test]
    fn oversized_numbers_fail_the_bound_check() {
        assert_eq!(
            check_field("99999999999999999999", 0, 59),
            Err(FieldError::ValueOutOfRange { min: 0, max: 59 })
        );
        assert_eq!(
            check_field("*/99999999999999999999", 0, 23),
            Err(FieldError::StepOutOfRange { max: 23 })
        );
    }

    #[test]
    fn error_messages_match_console_strings() {
        assert_eq!(FieldError::Malformed.to_string(), "無効な形式です");
        assert_eq!(
            FieldError::StepOutOfRange { max: 23 }.to_string(),
            "ステップ値が範囲外です (1-23)"
        );
        assert_eq!(
            FieldError::InvalidRange { min: 1, max: 12 }.to_string(),
            "範囲が無効です (1-12)"
        );
        assert_eq!(
            FieldError::ValueOutOfRange { min: 0, max: 59 }.to_string(),
            "値が範囲外です (0-59)"
        );
    }
}
