//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed timeline and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Utilization | busy time / makespan |
//! | Context switches | Transitions between distinct processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::Serialize;

use crate::models::{ProcessRecord, Timeline};

/// Per-process timing derived from a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    /// Process ID.
    pub id: String,
    /// First time the process held the processor.
    pub first_start: i64,
    /// Time the process finished.
    pub completion: i64,
    /// completion - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// first_start - arrival.
    pub response: i64,
}

/// Schedule performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time.
    pub makespan: i64,
    /// Total time the processor was busy.
    pub busy_time: i64,
    /// Fraction of `[0, makespan)` the processor was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Number of switches between distinct processes.
    pub context_switches: usize,
    /// Per-process metrics, in input order.
    pub per_process: Vec<ProcessMetrics>,
}

impl ScheduleKpi {
    /// Computes KPIs from a timeline and its input processes.
    ///
    /// Processes that never appear in the timeline are skipped.
    pub fn calculate(timeline: &Timeline, processes: &[ProcessRecord]) -> Self {
        let per_process: Vec<ProcessMetrics> = processes
            .iter()
            .filter_map(|p| {
                let first_start = timeline.first_start(&p.id)?;
                let completion = timeline.completion_time(&p.id)?;
                let turnaround = completion - p.arrival;
                Some(ProcessMetrics {
                    id: p.id.clone(),
                    first_start,
                    completion,
                    turnaround,
                    waiting: turnaround - p.burst,
                    response: first_start - p.arrival,
                })
            })
            .collect();

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64
        };

        Self {
            makespan,
            busy_time,
            cpu_utilization,
            avg_turnaround: mean(per_process.iter().map(|m| m.turnaround)),
            avg_waiting: mean(per_process.iter().map(|m| m.waiting)),
            avg_response: mean(per_process.iter().map(|m| m.response)),
            context_switches: timeline.context_switches(),
            per_process,
        }
    }

    /// Metrics for one process.
    pub fn metrics_for(&self, id: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.id == id)
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduledInterval;
    use crate::scheduler::{schedule, Algorithm};

    #[test]
    fn test_kpi_srt_example() {
        let processes = vec![
            ProcessRecord::new("A", 0, 5),
            ProcessRecord::new("B", 1, 3),
            ProcessRecord::new("C", 2, 1),
        ];
        let timeline = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
        let kpi = ScheduleKpi::calculate(&timeline, &processes);

        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.busy_time, 9);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        // A[0,1) B[1,2) C[2,3) B[3,5) A[5,9)
        assert_eq!(kpi.context_switches, 4);

        let a = kpi.metrics_for("A").unwrap();
        assert_eq!((a.completion, a.turnaround, a.waiting, a.response), (9, 9, 4, 0));
        let b = kpi.metrics_for("B").unwrap();
        assert_eq!((b.completion, b.turnaround, b.waiting, b.response), (5, 4, 1, 0));
        let c = kpi.metrics_for("C").unwrap();
        assert_eq!((c.completion, c.turnaround, c.waiting, c.response), (3, 1, 0, 0));

        // (9 + 4 + 1) / 3
        assert!((kpi.avg_turnaround - 14.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_waiting - 5.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_response - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization_with_idle() {
        let processes = vec![ProcessRecord::new("A", 5, 3)];
        let timeline: Timeline = vec![ScheduledInterval::new("A", 5, 8)].into_iter().collect();
        let kpi = ScheduleKpi::calculate(&timeline, &processes);

        assert_eq!(kpi.makespan, 8);
        assert!((kpi.cpu_utilization - 3.0 / 8.0).abs() < 1e-10);
        assert_eq!(kpi.metrics_for("A").unwrap().waiting, 0);
    }

    #[test]
    fn test_kpi_priority_waiting() {
        let processes = vec![
            ProcessRecord::new("A", 0, 4).with_priority(2),
            ProcessRecord::new("B", 0, 2).with_priority(1),
        ];
        let timeline = schedule(&processes, Algorithm::Priority).unwrap();
        let kpi = ScheduleKpi::calculate(&timeline, &processes);

        assert_eq!(kpi.metrics_for("A").unwrap().waiting, 2);
        assert_eq!(kpi.metrics_for("A").unwrap().response, 2);
        assert_eq!(kpi.metrics_for("B").unwrap().waiting, 0);
        assert!((kpi.avg_waiting - 1.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 1);
    }

    #[test]
    fn test_kpi_skips_unscheduled_processes() {
        let processes = vec![ProcessRecord::new("A", 0, 1), ProcessRecord::new("B", 0, 1)];
        let timeline: Timeline = vec![ScheduledInterval::new("A", 0, 1)].into_iter().collect();
        let kpi = ScheduleKpi::calculate(&timeline, &processes);

        assert_eq!(kpi.per_process.len(), 1);
        assert!(kpi.metrics_for("B").is_none());
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Timeline::new(), &[]);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.context_switches, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround - 0.0).abs() < 1e-10);
        assert!(kpi.per_process.is_empty());
    }
}
