//! Seeded random workload generation.
//!
//! Produces valid process sets for demos, benchmarks and property tests.
//! The same spec (including seed) always yields the same processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::ProcessRecord;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time (inclusive).
    pub max_arrival: i64,
    /// Shortest burst (inclusive, >= 1).
    pub min_burst: i64,
    /// Longest burst (inclusive).
    pub max_burst: i64,
    /// Number of priority levels; `None` leaves priorities unset.
    pub priority_levels: Option<i32>,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 8,
            priority_levels: Some(5),
            seed: 0,
        }
    }
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the arrival range `[0, max_arrival]`.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range `[min_burst, max_burst]`.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the number of priority levels (`None` = no priorities).
    pub fn with_priority_levels(mut self, levels: Option<i32>) -> Self {
        self.priority_levels = levels;
        self
    }

    fn check(&self) -> ScheduleResult<()> {
        let mut errors = Vec::new();
        if self.min_burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Workload min_burst must be >= 1, got {}", self.min_burst),
            ));
        }
        if self.max_burst < self.min_burst {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Workload max_burst {} is below min_burst {}",
                    self.max_burst, self.min_burst
                ),
            ));
        }
        if self.max_arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Workload max_arrival must be >= 0, got {}", self.max_arrival),
            ));
        }
        if self.priority_levels.is_some_and(|levels| levels < 1) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                "Workload priority_levels must be >= 1",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ScheduleError::InvalidProcessData(errors))
        }
    }
}

/// Generates processes `P1..Pn` according to `spec`.
pub fn generate(spec: &WorkloadSpec) -> ScheduleResult<Vec<ProcessRecord>> {
    spec.check()?;

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let processes = (1..=spec.count)
        .map(|n| {
            let arrival = rng.random_range(0..=spec.max_arrival);
            let burst = rng.random_range(spec.min_burst..=spec.max_burst);
            let record = ProcessRecord::new(format!("P{n}"), arrival, burst);
            match spec.priority_levels {
                Some(levels) => record.with_priority(rng.random_range(1..=levels)),
                None => record,
            }
        })
        .collect();

    Ok(processes)
}
