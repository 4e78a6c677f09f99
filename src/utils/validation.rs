//! Input validation helpers
//!
//! Create/patch payloads carry `validator` derive annotations; this
//! module turns the derived errors into a structured, deterministic
//! list of violated constraints surfaced as a single validation error.

use validator::{Validate, ValidationErrors};

use crate::utils::AppError;

/// Run derive-based validation and convert failures into
/// [`AppError::Validation`] listing every violated constraint.
pub fn check<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|errs| AppError::Validation(violations(&errs).join("; ")))
}

/// Flatten [`ValidationErrors`] into sorted `"field: constraint"` entries.
pub fn violations(errs: &ValidationErrors) -> Vec<String> {
    let mut out = Vec::new();
    for (field, field_errs) in errs.field_errors() {
        for err in field_errs.iter() {
            let detail = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            out.push(format!("{field}: {detail}"));
        }
    }
    out.sort();
    out
}
