//! CPU scheduling simulator.
//!
//! Computes single-processor execution timelines for a set of processes
//! and renders them as Gantt charts. The engine is a set of pure functions:
//! a validated process list goes in, an ordered list of `(id, start, end)`
//! intervals comes out.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ScheduledInterval`,
//!   `Timeline`, `ProcessTable`
//! - **`validation`**: Input integrity checks (empty/duplicate IDs, arrival, burst, priority)
//! - **`dispatching`**: Integer-scored dispatching rules and the `RuleEngine`
//! - **`scheduler`**: Shortest-remaining-time and priority schedulers, KPIs
//! - **`chart`**: Text Gantt chart rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::ProcessRecord;
//! use cpu_schedule::scheduler::{schedule, Algorithm};
//! use cpu_schedule::chart::{ChartConfig, GanttChart};
//!
//! let processes = vec![
//!     ProcessRecord::new("A", 0, 5),
//!     ProcessRecord::new("B", 1, 3),
//!     ProcessRecord::new("C", 2, 1),
//! ];
//! let timeline = schedule(&processes, Algorithm::ShortestTimeRemaining).unwrap();
//! assert_eq!(timeline.makespan(), 9);
//!
//! let chart = GanttChart::from_timeline(&timeline).render(&ChartConfig::default());
//! assert!(chart.starts_with('|'));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod chart;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::{schedule, Algorithm};
