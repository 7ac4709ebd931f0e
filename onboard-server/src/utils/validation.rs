//! Input validation helpers
//!
//! Centralized text length constants and validation functions. SQLite TEXT
//! has no built-in length enforcement, so limits live here.

use crate::utils::AppError;
use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names and slugs
pub const MAX_NAME_LEN: usize = 200;

/// Table codes (e.g. F0T1)
pub const MAX_TABLE_CODE_LEN: usize = 64;

/// Floor names (e.g. F0, Floor 1)
pub const MAX_FLOOR_NAME_LEN: usize = 64;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 50;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Short identifiers: GST number, tax codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Single language code (BCP 47 tags are short)
pub const MAX_LANGUAGE_CODE_LEN: usize = 16;

/// Service charge ceiling: the column is a 2-decimal percent, DECIMAL(5,2)
pub const MAX_SERVICE_CHARGE_PCT: f64 = 999.99;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a slug: non-empty, lowercase `a-z0-9-`, no edge or doubled hyphens.
pub fn validate_slug(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_NAME_LEN)?;

    let chars_ok = value
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !chars_ok || value.starts_with('-') || value.ends_with('-') || value.contains("--") {
        return Err(AppError::validation(format!(
            "{field} must be a lowercase slug (a-z, 0-9 and single '-')"
        )));
    }
    Ok(())
}

/// Validate an optional ordered list of language codes.
pub fn validate_languages(
    value: &Option<Vec<String>>,
    field: &str,
) -> Result<(), AppError> {
    if let Some(codes) = value {
        for code in codes {
            if code.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "{field} must not contain empty codes"
                )));
            }
            if code.len() > MAX_LANGUAGE_CODE_LEN {
                return Err(AppError::validation(format!(
                    "{field} code '{code}' is too long (max {MAX_LANGUAGE_CODE_LEN})"
                )));
            }
        }
    }
    Ok(())
}

/// Validate that an optional seat count is non-negative.
pub fn validate_max_seats(value: Option<i64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && v < 0
    {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {v}"
        )));
    }
    Ok(())
}

/// Normalize a service-charge percentage to 2 decimal places (half-up).
///
/// Range and finiteness are checked in `Decimal`, storage stays `f64`.
pub fn normalize_service_charge(value: f64, field: &str) -> Result<f64, AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    let dec = Decimal::from_f64(value)
        .ok_or_else(|| AppError::validation(format!("{field} is out of range, got {value}")))?;
    if dec < Decimal::ZERO || value > MAX_SERVICE_CHARGE_PCT {
        return Err(AppError::validation(format!(
            "{field} must be between 0 and {MAX_SERVICE_CHARGE_PCT}, got {value}"
        )));
    }
    Ok(dec
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0))
}
