//! End-to-end scheduling scenarios.

use cpu_schedule::models::{ProcessRecord, ProcessTable, ScheduledInterval};
use cpu_schedule::scheduler::{schedule, schedule_by_name, Algorithm, ScheduleKpi};
use cpu_schedule::validation::ValidationErrorKind;
use cpu_schedule::ScheduleError;
use pretty_assertions::assert_eq;
use std::thread;

fn iv(id: &str, start: i64, end: i64) -> ScheduledInterval {
    ScheduledInterval::new(id, start, end)
}

#[test]
fn test_srt_preemption_points() {
    let processes = vec![
        ProcessRecord::new("A", 0, 5),
        ProcessRecord::new("B", 1, 3),
        ProcessRecord::new("C", 2, 1),
    ];
    let timeline = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();

    assert_eq!(timeline.len(), 9);
    assert_eq!(
        timeline.merged(),
        vec![
            iv("A", 0, 1),
            iv("B", 1, 2),
            iv("C", 2, 3),
            iv("B", 3, 5),
            iv("A", 5, 9),
        ]
    );
    for p in &processes {
        assert_eq!(timeline.busy_time_for(&p.id), p.burst);
    }
}

#[test]
fn test_srt_input_order_does_not_matter_for_distinct_arrivals() {
    let forward = vec![
        ProcessRecord::new("A", 0, 5),
        ProcessRecord::new("B", 1, 3),
        ProcessRecord::new("C", 2, 1),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(
        schedule(&forward, Algorithm::ShortestTimeRemaining).unwrap(),
        schedule(&reversed, Algorithm::ShortestTimeRemaining).unwrap()
    );
}

#[test]
fn test_priority_example() {
    let processes = vec![
        ProcessRecord::new("A", 0, 4).with_priority(2),
        ProcessRecord::new("B", 0, 2).with_priority(1),
    ];
    let timeline = schedule(&processes, Algorithm::Priority).unwrap();
    assert_eq!(timeline.into_intervals(), vec![iv("B", 0, 2), iv("A", 2, 6)]);
}

#[test]
fn test_idle_gap_both_algorithms() {
    let processes = vec![ProcessRecord::new("A", 5, 3).with_priority(1)];

    let srt = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
    assert!(srt.intervals().iter().all(|i| i.start >= 5));
    assert_eq!(srt.merged(), vec![iv("A", 5, 8)]);

    let prio = schedule(&processes, Algorithm::Priority).unwrap();
    assert_eq!(prio.into_intervals(), vec![iv("A", 5, 8)]);
}

#[test]
fn test_empty_input_both_algorithms() {
    for algorithm in Algorithm::ALL {
        assert!(schedule(&[], algorithm).unwrap().is_empty());
    }
}

#[test]
fn test_zero_burst_rejected_by_both() {
    let processes = vec![
        ProcessRecord::new("A", 0, 3).with_priority(1),
        ProcessRecord::new("B", 0, 0).with_priority(2),
    ];
    for algorithm in Algorithm::ALL {
        let err = schedule(&processes, algorithm).unwrap_err();
        let kinds: Vec<_> = err.validation_errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ValidationErrorKind::NonPositiveBurst]);
    }
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let processes = vec![ProcessRecord::new("A", 0, 1)];

    let unsupported = schedule_by_name(&processes, "Round Robin").unwrap_err();
    assert!(matches!(unsupported, ScheduleError::UnsupportedAlgorithm(_)));

    let invalid = schedule_by_name(&processes, "Priority").unwrap_err();
    assert!(matches!(invalid, ScheduleError::InvalidProcessData(_)));
}

#[test]
fn test_table_to_schedule() {
    let mut table = ProcessTable::new();
    table.add_row("P1", "0", "3", "2", Algorithm::Priority).unwrap();
    table.add_row("P2", "1", "2", "1", Algorithm::Priority).unwrap();
    assert!(table.add_row("P3", "x", "2", "1", Algorithm::Priority).is_err());

    let timeline = schedule(table.records(), Algorithm::Priority).unwrap();
    // P2 outranks P1, so P1 waits for P2's arrival
    assert_eq!(timeline.into_intervals(), vec![iv("P2", 1, 3), iv("P1", 3, 6)]);
}

#[test]
fn test_kpi_end_to_end() {
    let processes = vec![
        ProcessRecord::new("A", 0, 8),
        ProcessRecord::new("B", 1, 4),
        ProcessRecord::new("C", 2, 9),
        ProcessRecord::new("D", 3, 5),
    ];
    let timeline = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
    let kpi = ScheduleKpi::calculate(&timeline, &processes);

    // A[0,1) B[1,5) D[5,10) A[10,17) C[17,26)
    assert_eq!(
        timeline.merged(),
        vec![
            iv("A", 0, 1),
            iv("B", 1, 5),
            iv("D", 5, 10),
            iv("A", 10, 17),
            iv("C", 17, 26),
        ]
    );
    assert_eq!(kpi.makespan, 26);
    // waiting: A 9, B 0, C 15, D 2 → 26 / 4
    assert!((kpi.avg_waiting - 6.5).abs() < 1e-10);
}

#[test]
fn test_concurrent_calls_agree() {
    let processes: Vec<ProcessRecord> = (0..12)
        .map(|i| ProcessRecord::new(format!("P{i}"), (i * 7) % 5, 1 + (i * 3) % 6).with_priority((i % 4) as i32))
        .collect();

    let shared = &processes;
    for algorithm in Algorithm::ALL {
        let baseline = schedule(shared, algorithm).unwrap();
        let results: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || schedule(shared, algorithm)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for result in results {
            assert_eq!(result.unwrap(), baseline);
        }
    }
}
