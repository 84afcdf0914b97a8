//! Timeline (solution) model.
//!
//! A timeline is the ordered sequence of intervals a scheduler produces:
//! each interval assigns the single processor to one process for a
//! half-open span `[start, end)`. Idle time is never recorded as an
//! interval; it is implied by gaps between intervals.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};

/// A process-time assignment on the processor.
///
/// Records that a process held the processor during `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledInterval {
    /// Process executed during this interval.
    pub id: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl ScheduledInterval {
    /// Creates a new interval.
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Length of the interval in time units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An ordered, non-overlapping sequence of scheduled intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<ScheduledInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval. Callers push in non-decreasing `start` order.
    pub fn push(&mut self, interval: ScheduledInterval) {
        self.intervals.push(interval);
    }

    /// The intervals in emission order.
    pub fn intervals(&self) -> &[ScheduledInterval] {
        &self.intervals
    }

    /// Consumes the timeline, returning its intervals.
    pub fn into_intervals(self) -> Vec<ScheduledInterval> {
        self.intervals
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval was scheduled.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Makespan: latest end time across all intervals (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total time the processor was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// Returns all intervals for a given process.
    pub fn intervals_for(&self, id: &str) -> Vec<&ScheduledInterval> {
        self.intervals.iter().filter(|i| i.id == id).collect()
    }

    /// Total processor time given to a process.
    pub fn busy_time_for(&self, id: &str) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.id == id)
            .map(|i| i.duration())
            .sum()
    }

    /// First time a process held the processor.
    pub fn first_start(&self, id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .filter(|i| i.id == id)
            .map(|i| i.start)
            .min()
    }

    /// Completion time for a process (latest end of its intervals).
    pub fn completion_time(&self, id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .filter(|i| i.id == id)
            .map(|i| i.end)
            .max()
    }

    /// Idle spans `[from, to)` between t=0 and the makespan.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for interval in &self.intervals {
            if interval.start > cursor {
                gaps.push((cursor, interval.start));
            }
            cursor = cursor.max(interval.end);
        }
        gaps
    }

    /// Coalesces contiguous intervals of the same process.
    ///
    /// Schedulers never merge their own output; this is a display helper.
    pub fn merged(&self) -> Vec<ScheduledInterval> {
        let mut merged: Vec<ScheduledInterval> = Vec::with_capacity(self.intervals.len());
        for interval in &self.intervals {
            match merged.last_mut() {
                Some(last) if last.id == interval.id && last.end == interval.start => {
                    last.end = interval.end;
                }
                _ => merged.push(interval.clone()),
            }
        }
        merged
    }

    /// Number of transitions between distinct processes.
    pub fn context_switches(&self) -> usize {
        self.merged()
            .windows(2)
            .filter(|pair| pair[0].id != pair[1].id)
            .count()
    }

    /// Whether every interval is non-empty and intervals are ordered
    /// by start without overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.start < i.end)
            && self
                .intervals
                .windows(2)
                .all(|pair| pair[0].end <= pair[1].start)
    }
}

impl FromIterator<ScheduledInterval> for Timeline {
    fn from_iter<I: IntoIterator<Item = ScheduledInterval>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}
