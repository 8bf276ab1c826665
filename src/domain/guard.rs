//! Guard validation helpers
//!
//! A guard inspects one input and reports a violation message on failure.
//! `combine` collects every violation from a set of checks so the caller
//! surfaces all failures at once instead of stopping at the first.

use uuid::Uuid;

use super::error::{DomainError, DomainResult};

/// A single failed guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardViolation {
    /// Human-readable field label, e.g. "Recipient ID"
    pub field: &'static str,
    pub message: String,
}

impl GuardViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Fails when `value` is an empty string.
pub fn against_empty(value: &str, field: &'static str) -> Option<GuardViolation> {
    if value.is_empty() {
        Some(GuardViolation::new(
            field,
            format!("{} cannot be empty", field),
        ))
    } else {
        None
    }
}

/// Fails when `value` is not a well-formed UUID.
pub fn against_non_uuid(value: &str, field: &'static str) -> Option<GuardViolation> {
    if Uuid::parse_str(value).is_err() {
        Some(GuardViolation::new(
            field,
            format!("{} must be a valid UUID", field),
        ))
    } else {
        None
    }
}

/// Combine the outcome of several guards into one result.
///
/// Every violation message ends up in a single `InvalidParams` error,
/// joined with `"; "`.
pub fn combine<I>(checks: I) -> DomainResult<()>
where
    I: IntoIterator<Item = Option<GuardViolation>>,
{
    let messages: Vec<String> = checks
        .into_iter()
        .flatten()
        .map(|violation| violation.message)
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(DomainError::InvalidParams(messages.join("; ")))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn against_empty_passes_non_empty() {
        assert!(against_empty("billing", "Category").is_none());
    }

    #[test]
    fn against_empty_fails_empty() {
        let violation = against_empty("", "Category").unwrap();
        assert_eq!(violation.field, "Category");
        assert_eq!(violation.message, "Category cannot be empty");
    }

    #[test]
    fn against_non_uuid_passes_valid_uuid() {
        assert!(against_non_uuid("11111111-1111-1111-1111-111111111111", "ID").is_none());
    }

    #[test]
    fn against_non_uuid_fails_malformed() {
        let violation = against_non_uuid("not-a-uuid", "ID").unwrap();
        assert_eq!(violation.message, "ID must be a valid UUID");
    }

    #[test]
    fn combine_ok_when_no_violations() {
        let result = combine([
            against_empty("system", "Category"),
            against_non_uuid("11111111-1111-1111-1111-111111111111", "ID"),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn combine_joins_every_violation() {
        let err = combine([
            against_empty("", "Category"),
            against_empty("", "Recipient ID"),
            against_non_uuid("", "Recipient ID"),
        ])
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Category cannot be empty"));
        assert!(message.contains("Recipient ID cannot be empty"));
        assert!(message.contains("Recipient ID must be a valid UUID"));
    }
}
