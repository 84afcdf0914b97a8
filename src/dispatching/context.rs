//! Scheduling context for dispatching rule evaluation.

use std::collections::HashMap;

/// Runtime scheduling state passed to dispatching rules.
///
/// Holds the simulation clock and the remaining processor time of each
/// process (by ID). Rules fall back to static record fields when a process
/// has no entry.
#[derive(Debug, Clone, Default)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
    /// Remaining processor time per process (process_id → time units).
    pub remaining: HashMap<String, i64>,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets remaining time for a process.
    pub fn with_remaining(mut self, process_id: impl Into<String>, time: i64) -> Self {
        self.remaining.insert(process_id.into(), time);
        self
    }

    /// Remaining time recorded for a process.
    pub fn remaining_time(&self, process_id: &str) -> Option<i64> {
        self.remaining.get(process_id).copied()
    }

    /// Charges one unit of execution to a process and advances the clock.
    ///
    /// Returns the process's remaining time after the step.
    pub fn run_one_unit(&mut self, process_id: &str) -> Option<i64> {
        self.current_time += 1;
        let remaining = self.remaining.get_mut(process_id)?;
        *remaining -= 1;
        Some(*remaining)
    }
}
