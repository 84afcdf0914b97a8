//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules in sequence (the next rule is consulted only
//! on ties) and resolves complete ties by input position, so every
//! ordering it returns is a total order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

/// A composable rule engine for process prioritization.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{RuleEngine, SchedulingContext};
/// use cpu_schedule::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestRemaining)
///     .with_rule(rules::EarliestArrival);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into the original process slice.
    pub fn sort_indices(&self, processes: &[ProcessRecord], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(processes, a, b, context));
        indices
    }

    /// Returns the index of the highest-priority process.
    pub fn select_best(&self, processes: &[ProcessRecord], context: &SchedulingContext) -> Option<usize> {
        self.select_from(processes, 0..processes.len(), context)
    }

    /// Returns the highest-priority index among `candidates`.
    ///
    /// Candidates must be valid indices into `processes`.
    pub fn select_from<I>(
        &self,
        processes: &[ProcessRecord],
        candidates: I,
        context: &SchedulingContext,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .reduce(|best, next| match self.compare(processes, next, best, context) {
                Ordering::Less => next,
                _ => best,
            })
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    /// Number of configured rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn compare(
        &self,
        processes: &[ProcessRecord],
        a: usize,
        b: usize,
        context: &SchedulingContext,
    ) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(&processes[a], context);
            let score_b = rule.evaluate(&processes[b], context);
            if score_a != score_b {
                return score_a.cmp(&score_b);
            }
        }

        // All rules tied → earlier input position wins
        a.cmp(&b)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
