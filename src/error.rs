//! Scheduling errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Scheduling operation result.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors returned by the scheduling engine.
///
/// Empty input is not an error; both schedulers return an empty timeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// One or more process records violate the input invariants.
    /// No interval is produced.
    #[error("Invalid process data: {}", join_messages(.0))]
    InvalidProcessData(Vec<ValidationError>),

    /// The algorithm selector names no known scheduler.
    #[error("Unsupported scheduling algorithm: '{0}'")]
    UnsupportedAlgorithm(String),
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidProcessData` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidProcessData(errors) => errors,
            Self::UnsupportedAlgorithm(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidProcessData(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_data_message_lists_every_error() {
        let err = ScheduleError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyId, "first"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "second"),
        ]);
        assert_eq!(err.to_string(), "Invalid process data: first; second");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_unsupported_algorithm_message() {
        let err = ScheduleError::UnsupportedAlgorithm("Round Robin".into());
        assert_eq!(
            err.to_string(),
            "Unsupported scheduling algorithm: 'Round Robin'"
        );
        assert!(err.validation_errors().is_empty());
    }
}
