//! Non-preemptive priority scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by `(priority ascending, arrival ascending)`, keeping
//!    input order for full ties.
//! 2. Walk the order with a single clock starting at 0. Each process starts
//!    at `max(clock, arrival)` and runs for its whole burst.
//! 3. Emit exactly one interval per process.
//!
//! The order is fixed up front: a process that has not arrived yet still
//! keeps its rank, and the processor idles until it arrives even if a
//! lower-ranked process is already waiting. Idle gaps are not recorded.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use tracing::{debug, instrument};

use super::{Algorithm, Scheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::ScheduleResult;
use crate::models::{ProcessRecord, ScheduledInterval, Timeline};
use crate::validation::validate_processes;

/// Non-preemptive priority scheduler (lower priority value runs first).
///
/// # Example
///
/// ```
/// use cpu_schedule::models::{ProcessRecord, ScheduledInterval};
/// use cpu_schedule::scheduler::PriorityScheduler;
///
/// let processes = vec![
///     ProcessRecord::new("A", 0, 4).with_priority(2),
///     ProcessRecord::new("B", 0, 2).with_priority(1),
/// ];
/// let timeline = PriorityScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(
///     timeline.intervals(),
///     &[ScheduledInterval::new("B", 0, 2), ScheduledInterval::new("A", 2, 6)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    engine: RuleEngine,
}

impl PriorityScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::LowestPriorityValue)
                .with_rule(rules::EarliestArrival),
        }
    }

    /// Schedules processes to completion in priority order.
    #[instrument(level = "debug", skip_all, fields(algorithm = "priority", processes = processes.len()))]
    pub fn schedule(&self, processes: &[ProcessRecord]) -> ScheduleResult<Timeline> {
        validate_processes(processes, true)?;

        let order = self
            .engine
            .sort_indices(processes, &SchedulingContext::at_time(0));

        let mut timeline = Timeline::new();
        let mut clock = 0;
        for index in order {
            let process = &processes[index];
            let start = clock.max(process.arrival);
            if start > clock {
                debug!(from = clock, to = start, waiting_for = %process.id, "processor idle");
            }
            clock = start + process.burst;
            timeline.push(ScheduledInterval::new(process.id.clone(), start, clock));
        }

        debug!(
            intervals = timeline.len(),
            makespan = timeline.makespan(),
            "priority schedule complete"
        );
        Ok(timeline)
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> ScheduleResult<Timeline> {
        PriorityScheduler::schedule(self, processes)
    }
}
