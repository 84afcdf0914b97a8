//! Dispatching rules and rule engine for process selection.
//!
//! Every ordering decision the schedulers make (which arrived process runs
//! next, in what order non-preemptive processes are queued) is expressed as
//! a chain of dispatching rules evaluated by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{RuleEngine, SchedulingContext};
//! use cpu_schedule::dispatching::rules;
//! use cpu_schedule::models::ProcessRecord;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::LowestPriorityValue)
//!     .with_rule(rules::EarliestArrival);
//!
//! let processes = vec![
//!     ProcessRecord::new("A", 0, 4).with_priority(2),
//!     ProcessRecord::new("B", 0, 2).with_priority(1),
//! ];
//! let order = engine.sort_indices(&processes, &SchedulingContext::at_time(0));
//! assert_eq!(order, vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integers
/// so selection never depends on floating-point comparison.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "FCFS").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
