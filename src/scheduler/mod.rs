//! CPU schedulers and KPI evaluation.
//!
//! Two single-processor disciplines share one contract: take a validated
//! process list, return an ordered [`Timeline`] of `(id, start, end)`
//! intervals.
//!
//! # Algorithms
//!
//! - [`ShortestRemainingScheduler`]: preemptive, advances the clock in unit
//!   steps and always runs the arrived process with the least remaining time.
//! - [`PriorityScheduler`]: non-preemptive, runs processes to completion in
//!   `(priority, arrival)` order.
//!
//! Both are pure: no shared state, no I/O, and the same input always yields
//! the same timeline, so calls may run concurrently without synchronization.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes turnaround, waiting and response times plus
//! processor utilization for a finished timeline.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod kpi;
mod priority;
mod srt;

pub use kpi::{ProcessMetrics, ScheduleKpi};
pub use priority::PriorityScheduler;
pub use srt::ShortestRemainingScheduler;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{ProcessRecord, Timeline};

/// A single-processor scheduling discipline.
pub trait Scheduler: Send + Sync + fmt::Debug {
    /// Which algorithm this scheduler implements.
    fn algorithm(&self) -> Algorithm;

    /// Computes the timeline for `processes`.
    ///
    /// Input is validated first; invalid records yield
    /// [`ScheduleError::InvalidProcessData`] and no intervals.
    fn schedule(&self, processes: &[ProcessRecord]) -> ScheduleResult<Timeline>;
}

/// Algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Preemptive shortest-remaining-time-first.
    ShortestTimeRemaining,
    /// Non-preemptive priority scheduling.
    Priority,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 2] = [Algorithm::ShortestTimeRemaining, Algorithm::Priority];

    /// Display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShortestTimeRemaining => "Shortest Time Remaining",
            Self::Priority => "Priority",
        }
    }

    /// Whether every process must carry a priority value.
    pub const fn requires_priority(&self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Returns a scheduler implementing this algorithm.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match self {
            Self::ShortestTimeRemaining => Box::new(ShortestRemainingScheduler::new()),
            Self::Priority => Box::new(PriorityScheduler::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    /// Parses display names case-insensitively, plus short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "shortest_time_remaining" | "shortest_remaining_time" | "srt" | "srtf" => {
                Ok(Self::ShortestTimeRemaining)
            }
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(ScheduleError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Computes the timeline for `processes` under `algorithm`.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessRecord;
/// use cpu_schedule::scheduler::{schedule, Algorithm};
///
/// let processes = vec![
///     ProcessRecord::new("A", 0, 4).with_priority(2),
///     ProcessRecord::new("B", 0, 2).with_priority(1),
/// ];
/// let timeline = schedule(&processes, Algorithm::Priority).unwrap();
/// assert_eq!(timeline.first_start("B"), Some(0));
/// assert_eq!(timeline.completion_time("A"), Some(6));
/// ```
pub fn schedule(processes: &[ProcessRecord], algorithm: Algorithm) -> ScheduleResult<Timeline> {
    match algorithm {
        Algorithm::ShortestTimeRemaining => ShortestRemainingScheduler::new().schedule(processes),
        Algorithm::Priority => PriorityScheduler::new().schedule(processes),
    }
}

/// Parses the algorithm selector, then schedules.
///
/// An unknown selector fails with [`ScheduleError::UnsupportedAlgorithm`]
/// before any process is inspected.
pub fn schedule_by_name(processes: &[ProcessRecord], algorithm: &str) -> ScheduleResult<Timeline> {
    let algorithm: Algorithm = algorithm.parse()?;
    schedule(processes, algorithm)
}

/// Input container for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Algorithm to apply.
    pub algorithm: Algorithm,
    /// Processes to schedule.
    pub processes: Vec<ProcessRecord>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(algorithm: Algorithm, processes: Vec<ProcessRecord>) -> Self {
        Self {
            algorithm,
            processes,
        }
    }

    /// Schedules the request's processes.
    pub fn run(&self) -> ScheduleResult<Timeline> {
        schedule(&self.processes, self.algorithm)
    }
}
