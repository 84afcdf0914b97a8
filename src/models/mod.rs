//! CPU scheduling domain models.
//!
//! Provides the data types exchanged with the schedulers: process records
//! going in, timelines of scheduled intervals coming out.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | OS textbook | Gantt chart |
//! |--------------|-------------|-------------|
//! | ProcessRecord | PCB (arrival, burst, priority) | Row label |
//! | ScheduledInterval | Dispatch period | Bar |
//! | Timeline | Execution trace | Chart |

mod process;
mod table;
mod timeline;

pub use process::ProcessRecord;
pub use table::ProcessTable;
pub use timeline::{ScheduledInterval, Timeline};
