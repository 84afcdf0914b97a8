//! `cpu-schedule`: schedule a JSON request and print its Gantt chart.

use std::fmt::{self, Write as _};
use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use cpu_schedule::chart::GanttChart;
use cpu_schedule::config::{Command, RunConfig};
use cpu_schedule::models::ProcessRecord;
use cpu_schedule::scheduler::{ScheduleKpi, ScheduleRequest};
use cpu_schedule::telemetry::init_tracing;
use cpu_schedule::workload::generate;

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    init_tracing(config.json_logs).context("initializing tracing")?;

    match &config.command {
        Command::Generate { spec, algorithm } => {
            let request = ScheduleRequest::new(*algorithm, generate(spec)?);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::Run { input } => {
            let raw = fs::read_to_string(input)
                .with_context(|| format!("reading {}", input.display()))?;
            let request: ScheduleRequest = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", input.display()))?;

            info!(
                algorithm = %request.algorithm,
                processes = request.processes.len(),
                "scheduling"
            );
            let timeline = request.run()?;
            let kpi = ScheduleKpi::calculate(&timeline, &request.processes);

            println!("{} Gantt chart", request.algorithm);
            println!("{}", GanttChart::from_timeline(&timeline).render(&config.chart));
            println!();
            print!("{}", report(&request.processes, &kpi)?);
        }
    }

    Ok(())
}

fn report(processes: &[ProcessRecord], kpi: &ScheduleKpi) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{:<10} {:>7} {:>5} {:>10} {:>10} {:>7} {:>8}",
        "Process", "Arrival", "Burst", "Completion", "Turnaround", "Waiting", "Response"
    )?;
    for p in processes {
        if let Some(m) = kpi.metrics_for(&p.id) {
            writeln!(
                out,
                "{:<10} {:>7} {:>5} {:>10} {:>10} {:>7} {:>8}",
                p.id, p.arrival, p.burst, m.completion, m.turnaround, m.waiting, m.response
            )?;
        }
    }
    writeln!(
        out,
        "\nmakespan {}  utilization {:.1}%  context switches {}",
        kpi.makespan,
        kpi.cpu_utilization * 100.0,
        kpi.context_switches
    )?;
    writeln!(
        out,
        "avg turnaround {:.2}  avg waiting {:.2}  avg response {:.2}",
        kpi.avg_turnaround, kpi.avg_waiting, kpi.avg_response
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpu_schedule::scheduler::{schedule, Algorithm};

    #[test]
    fn test_report_lists_processes_and_averages() {
        let processes = vec![
            ProcessRecord::new("A", 0, 4).with_priority(2),
            ProcessRecord::new("B", 0, 2).with_priority(1),
        ];
        let timeline = schedule(&processes, Algorithm::Priority).unwrap();
        let kpi = ScheduleKpi::calculate(&timeline, &processes);

        let out = report(&processes, &kpi).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("Process"));
        assert!(lines[1].starts_with("A "));
        assert!(lines[2].starts_with("B "));
        assert!(out.contains("makespan 6"));
        assert!(out.contains("avg waiting 1.00"));
    }
}
