//! Property tests over generated valid process sets.

use cpu_schedule::models::{ProcessRecord, Timeline};
use cpu_schedule::scheduler::{schedule, Algorithm};
use proptest::prelude::*;

fn process_set() -> impl Strategy<Value = Vec<ProcessRecord>> {
    prop::collection::vec((0i64..20, 1i64..8, -3i32..4), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessRecord::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn check_common(processes: &[ProcessRecord], timeline: &Timeline) -> Result<(), TestCaseError> {
    prop_assert!(timeline.is_well_formed());
    for p in processes {
        prop_assert_eq!(timeline.busy_time_for(&p.id), p.burst);
        let first = timeline.first_start(&p.id);
        prop_assert!(first.is_some());
        prop_assert!(first.unwrap_or(i64::MIN) >= p.arrival);
    }
    let total: i64 = processes.iter().map(|p| p.burst).sum();
    prop_assert_eq!(timeline.busy_time(), total);
    Ok(())
}

proptest! {
    #[test]
    fn srt_is_deterministic(processes in process_set()) {
        let a = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
        let b = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn priority_is_deterministic(processes in process_set()) {
        let a = schedule(&processes, Algorithm::Priority).unwrap();
        let b = schedule(&processes, Algorithm::Priority).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn srt_covers_every_burst(processes in process_set()) {
        let timeline = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
        check_common(&processes, &timeline)?;
        prop_assert!(timeline.intervals().iter().all(|i| i.duration() == 1));

        let bound = processes.iter().map(|p| p.arrival).max().unwrap_or(0)
            + processes.iter().map(|p| p.burst).sum::<i64>();
        prop_assert!(timeline.makespan() <= bound);
    }

    #[test]
    fn priority_covers_every_burst(processes in process_set()) {
        let timeline = schedule(&processes, Algorithm::Priority).unwrap();
        check_common(&processes, &timeline)?;
        prop_assert_eq!(timeline.len(), processes.len());
    }

    #[test]
    fn srt_never_idles_with_work_pending(processes in process_set()) {
        let timeline = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
        for (from, _) in timeline.idle_gaps() {
            for p in processes.iter().filter(|p| p.arrival <= from) {
                prop_assert!(timeline.completion_time(&p.id).unwrap_or(i64::MAX) <= from);
            }
        }
    }

    #[test]
    fn srt_runs_least_remaining(processes in process_set()) {
        // Replay the timeline and check each unit went to a minimal-remaining process.
        let timeline = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        for interval in timeline.intervals() {
            let chosen = processes.iter().position(|p| p.id == interval.id).unwrap();
            let min = processes
                .iter()
                .enumerate()
                .filter(|(i, p)| p.arrival <= interval.start && remaining[*i] > 0)
                .map(|(i, _)| remaining[i])
                .min()
                .unwrap();
            prop_assert_eq!(remaining[chosen], min);
            remaining[chosen] -= 1;
        }
    }
}
