//! Process table: raw input rows → process records.
//!
//! Models the data-entry collaborator that collects process rows as text.
//! A row is accepted only when its fields are well-formed; semantic checks
//! (unique IDs, positive bursts) are left to [`crate::validation`], which
//! every scheduler runs before computing a timeline.

use super::ProcessRecord;
use crate::scheduler::Algorithm;
use crate::validation::{ValidationError, ValidationErrorKind};

/// An ordered collection of process rows awaiting scheduling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    rows: Vec<ProcessRecord>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and appends a raw row.
    ///
    /// `arrival` and `burst` must be non-empty strings of ASCII digits. The
    /// priority field is checked the same way when `algorithm` needs it and
    /// is dropped otherwise. On error the table is left unchanged.
    pub fn add_row(
        &mut self,
        pid: &str,
        arrival: &str,
        burst: &str,
        priority: &str,
        algorithm: Algorithm,
    ) -> Result<(), ValidationError> {
        if pid.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::MalformedField,
                "Process ID must not be empty",
            ));
        }

        let arrival = parse_digits(pid, "arrival", arrival)?;
        let burst = parse_digits(pid, "burst", burst)?;
        let mut record = ProcessRecord::new(pid, arrival, burst);

        if algorithm.requires_priority() {
            let priority = parse_digits(pid, "priority", priority)?;
            let priority = i32::try_from(priority).map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::MalformedField,
                    format!("Process '{pid}': priority {priority} is out of range"),
                )
            })?;
            record = record.with_priority(priority);
        }

        self.rows.push(record);
        Ok(())
    }

    /// Appends an already-built record.
    pub fn push(&mut self, record: ProcessRecord) {
        self.rows.push(record);
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in entry order.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.rows
    }

    /// Consumes the table, returning its rows.
    pub fn into_records(self) -> Vec<ProcessRecord> {
        self.rows
    }
}

fn parse_digits(pid: &str, field: &str, raw: &str) -> Result<i64, ValidationError> {
    let malformed = || {
        ValidationError::new(
            ValidationErrorKind::MalformedField,
            format!("Process '{pid}': {field} '{raw}' is not a non-negative integer"),
        )
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    raw.parse().map_err(|_| malformed())
}
