//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: SRT (remaining time), SBT (total burst)
//! - **Arrival**: FCFS
//! - **Priority**: PRIO (lower value first)
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

// ======================== Time-based rules ========================

/// Shortest Remaining Time.
///
/// Prioritizes processes closest to completion. Uses
/// `context.remaining` if available, falls back to the full burst.
///
/// # Reference
/// Schrage (1968), optimal for mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> RuleScore {
        context
            .remaining_time(&process.id)
            .unwrap_or(process.burst)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Shortest Burst Time.
///
/// Prioritizes processes with the smallest total burst, ignoring progress.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SBT"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Burst Time"
    }
}

// ======================== Arrival rules ========================

/// First Come, First Served.
///
/// Prioritizes processes that arrived earliest.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

// ======================== Priority rules ========================

/// Priority value, ascending.
///
/// Lower priority values run first. Processes without a priority sort
/// after every prioritized process.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriorityValue;

impl DispatchingRule for LowestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIO"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.priority.map(RuleScore::from).unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value First"
    }
}
