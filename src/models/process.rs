//! Process record model.
//!
//! A process record is the unit of work handed to a scheduler: an identifier,
//! the time unit at which it becomes eligible to run, the processor time it
//! needs, and (for priority scheduling) its priority value.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single processor.
///
/// Records are read-only during scheduling; schedulers keep their own
/// working state (remaining-time counters, clock).
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: String,
    /// Time unit at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total processor time required.
    pub burst: i64,
    /// Priority value (lower = runs first). Required by priority scheduling only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl ProcessRecord {
    /// Creates a process record without a priority.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the priority value.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Earliest time at which this process could finish if it ran uninterrupted.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival + self.burst
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival <= t
    }
}
