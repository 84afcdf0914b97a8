//! Input validation for process sets.
//!
//! Checks the invariants every scheduler relies on before any timeline
//! is computed. Detects:
//! - Empty or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities (priority scheduling only)
//! - Time horizons that do not fit in `i64`
//!
//! All violations are collected, so callers can report every bad record
//! at once instead of fixing them one by one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::ProcessRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty identifier.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative processor time.
    NonPositiveBurst,
    /// Priority scheduling was requested but a process has no priority.
    MissingPriority,
    /// A raw input field could not be parsed.
    MalformedField,
    /// Latest arrival plus total burst time exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before scheduling.
///
/// Checks:
/// 1. Every ID is non-empty
/// 2. No duplicate IDs
/// 3. `arrival >= 0`
/// 4. `burst > 0`
/// 5. A priority is present on every record when `require_priority` is set
/// 6. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock
///    value a scheduler can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessRecord], require_priority: bool) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {index} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst),
            ));
        }

        if require_priority && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival {latest_arrival} plus total burst time exceeds {}",
                i64::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
