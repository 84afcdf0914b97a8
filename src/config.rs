//! Run configuration for the `cpu-schedule` binary.
//!
//! Built from command-line arguments plus environment variables:
//!
//! | Source | Meaning |
//! |--------|---------|
//! | `<request.json>` | Schedule the request file and print chart + KPIs |
//! | `--generate <count> [seed] [algorithm]` | Print a random request as JSON |
//! | `CPU_SCHEDULE_CHART_SCALE` | Chart columns per time unit (default 4, >= 1) |
//! | `CPU_SCHEDULE_TRACE_JSON` | `1`/`true` for JSON log output |

use std::path::PathBuf;

use thiserror::Error;

use crate::chart::ChartConfig;
use crate::error::ScheduleError;
use crate::scheduler::Algorithm;
use crate::workload::WorkloadSpec;

/// Environment variable holding the chart scale.
pub const CHART_SCALE_ENV: &str = "CPU_SCHEDULE_CHART_SCALE";
/// Environment variable enabling JSON logs.
pub const TRACE_JSON_ENV: &str = "CPU_SCHEDULE_TRACE_JSON";

/// Usage line printed on argument errors.
pub const USAGE: &str =
    "usage: cpu-schedule <request.json> | cpu-schedule --generate <count> [seed] [algorithm]";

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Schedule a JSON request file.
    Run { input: PathBuf },
    /// Emit a generated request.
    Generate {
        spec: WorkloadSpec,
        algorithm: Algorithm,
    },
}

/// Complete run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Selected command.
    pub command: Command,
    /// Chart layout.
    pub chart: ChartConfig,
    /// JSON log output.
    pub json_logs: bool,
}

impl RunConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_args_and_env(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Builds a configuration from explicit arguments (program name excluded)
    /// and an environment lookup.
    pub fn from_args_and_env<I, E>(args: I, env: E) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let command = parse_command(&args)?;

        let mut chart = ChartConfig::default();
        if let Some(raw) = env(CHART_SCALE_ENV) {
            let scale = parse_value::<usize>(CHART_SCALE_ENV, &raw)?;
            if scale == 0 {
                return Err(invalid(CHART_SCALE_ENV, &raw));
            }
            chart = chart.with_scale(scale);
        }

        let json_logs = env(TRACE_JSON_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            command,
            chart,
            json_logs,
        })
    }
}

fn parse_command(args: &[String]) -> Result<Command, ConfigError> {
    match args {
        [flag, rest @ ..] if flag == "--generate" => {
            let (count, seed, algorithm) = match rest {
                [count] => (count, None, None),
                [count, seed] => (count, Some(seed), None),
                [count, seed, algorithm] => (count, Some(seed), Some(algorithm)),
                _ => return Err(ConfigError::Usage),
            };

            let count = parse_value::<usize>("count", count)?;
            let seed = seed
                .map(|s| parse_value::<u64>("seed", s))
                .transpose()?
                .unwrap_or(0);
            let algorithm = match algorithm {
                Some(name) => name.parse::<Algorithm>()?,
                None => Algorithm::ShortestTimeRemaining,
            };

            let levels = algorithm.requires_priority().then_some(5);
            let spec = WorkloadSpec::new(count)
                .with_seed(seed)
                .with_priority_levels(levels);
            Ok(Command::Generate { spec, algorithm })
        }
        [input] if !input.starts_with('-') => Ok(Command::Run {
            input: PathBuf::from(input),
        }),
        _ => Err(ConfigError::Usage),
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| invalid(name, raw))
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}
