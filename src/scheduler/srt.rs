//! Preemptive shortest-remaining-time scheduler.
//!
//! # Algorithm
//!
//! 1. Give every process a remaining-time counter equal to its burst.
//! 2. Advance the clock in unit steps from t=0.
//! 3. At each step, the available set is every process with
//!    `arrival <= now` and remaining time > 0. If it is empty the processor
//!    idles until the next arrival and nothing is recorded.
//! 4. Otherwise run the available process with the least remaining time for
//!    one unit and record `[now, now + 1)` for it.
//! 5. Stop once every process has finished.
//!
//! Ties on remaining time go to the earliest arrival, then to the earlier
//! position in the input, i.e. the first minimum in arrival-sorted order.
//! Unit intervals are never merged here; see [`Timeline::merged`].
//!
//! # Complexity
//! O((B + n) * n) where B = `sum(burst)`: every step either runs a unit or
//! skips an idle span, so the cost does not depend on arrival times.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::{debug, instrument, trace};

use super::{Algorithm, Scheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::error::ScheduleResult;
use crate::models::{ProcessRecord, ScheduledInterval, Timeline};
use crate::validation::validate_processes;

/// Preemptive shortest-remaining-time-first scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessRecord;
/// use cpu_schedule::scheduler::ShortestRemainingScheduler;
///
/// let processes = vec![
///     ProcessRecord::new("A", 0, 5),
///     ProcessRecord::new("B", 1, 3),
///     ProcessRecord::new("C", 2, 1),
/// ];
/// let timeline = ShortestRemainingScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(timeline.completion_time("C"), Some(3));
/// assert_eq!(timeline.completion_time("B"), Some(5));
/// assert_eq!(timeline.completion_time("A"), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestRemainingScheduler {
    engine: RuleEngine,
}

impl ShortestRemainingScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::ShortestRemaining)
                .with_rule(rules::EarliestArrival),
        }
    }

    /// Schedules processes one time unit at a time.
    #[instrument(level = "debug", skip_all, fields(algorithm = "srt", processes = processes.len()))]
    pub fn schedule(&self, processes: &[ProcessRecord]) -> ScheduleResult<Timeline> {
        validate_processes(processes, false)?;

        let mut timeline = Timeline::new();
        let mut ctx = SchedulingContext::at_time(0);
        for p in processes {
            ctx.remaining.insert(p.id.clone(), p.burst);
        }

        let total = processes.len();
        let mut completed = 0;
        let mut previous: Option<usize> = None;

        while completed < total {
            let now = ctx.current_time;
            let available = (0..total).filter(|&i| {
                let p = &processes[i];
                p.has_arrived(now) && ctx.remaining_time(&p.id).is_some_and(|r| r > 0)
            });

            let Some(current) = self.engine.select_from(processes, available, &ctx) else {
                let next_arrival = processes
                    .iter()
                    .filter(|p| ctx.remaining_time(&p.id).is_some_and(|r| r > 0))
                    .map(|p| p.arrival)
                    .min();
                let Some(next_arrival) = next_arrival else {
                    break;
                };
                trace!(from = now, to = next_arrival, "processor idle");
                ctx.current_time = next_arrival;
                continue;
            };

            let process = &processes[current];
            if let Some(prev) = previous.filter(|&prev| prev != current) {
                let prev_id = &processes[prev].id;
                if ctx.remaining_time(prev_id).is_some_and(|r| r > 0) {
                    debug!(time = now, preempted = %prev_id, by = %process.id, "preemption");
                }
            }

            let remaining = ctx.run_one_unit(&process.id).unwrap_or(0);
            trace!(time = now, process = %process.id, remaining, "ran one unit");
            timeline.push(ScheduledInterval::new(process.id.clone(), now, ctx.current_time));

            if remaining == 0 {
                completed += 1;
                debug!(process = %process.id, completion = ctx.current_time, "process finished");
            }
            previous = Some(current);
        }

        debug!(
            intervals = timeline.len(),
            makespan = timeline.makespan(),
            "srt schedule complete"
        );
        Ok(timeline)
    }
}

impl Default for ShortestRemainingScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ShortestRemainingScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestTimeRemaining
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> ScheduleResult<Timeline> {
        ShortestRemainingScheduler::schedule(self, processes)
    }
}
