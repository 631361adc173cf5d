use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use scheduler::{Algorithm, Policy};

use crate::error::RunnerError;

/// Environment variable holding the log level
pub const LOG_ENV: &str = "SCHED_LOG";

pub const USAGE: &str = "\
usage: runner <ALGORITHM> [--quantum N] [--input FILE] [--json]

  ALGORITHM      FCFS, SJF, Priority or \"Round Robin\" (also RR)
  --quantum N    time quantum, required for Round Robin
  --input FILE   JSON array of {\"id\", \"arrival_time\", \"burst_time\", \"priority\"}
                 (the built-in demo workload is used when omitted)
  --json         print the result as JSON

Set SCHED_LOG to error, warn, info, debug, trace or off to control logging.";

/// Settings of a single runner invocation
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub policy: Policy,
    /// Quantum given for an algorithm that does not use one
    pub unused_quantum: Option<i64>,
    pub input: Option<PathBuf>,
    pub json: bool,
}

impl Config {
    /// Parses the command line, without the program name
    pub fn from_args<I>(args: I) -> Result<Config, RunnerError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut algorithm: Option<Algorithm> = None;
        let mut quantum: Option<i64> = None;
        let mut input: Option<PathBuf> = None;
        let mut json = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(RunnerError::HelpRequested),
                "--json" => json = true,
                "-q" | "--quantum" => {
                    let value = value_of(&arg, args.next())?;
                    let parsed = value.trim().parse::<i64>().map_err(|_| {
                        RunnerError::Usage(format!(
                            "time quantum must be an integer, got {value:?}"
                        ))
                    })?;
                    quantum = Some(parsed);
                }
                "-i" | "--input" => input = Some(PathBuf::from(value_of(&arg, args.next())?)),
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(RunnerError::Usage(format!("unknown option {flag}")));
                }
                name => {
                    if algorithm.is_some() {
                        return Err(RunnerError::Usage(format!("unexpected argument {name:?}")));
                    }
                    algorithm = Some(Algorithm::from_str(name)?);
                }
            }
        }

        let algorithm =
            algorithm.ok_or_else(|| RunnerError::Usage("missing ALGORITHM".to_string()))?;

        let (policy, unused_quantum) = match algorithm {
            Algorithm::RoundRobin => {
                let quantum = quantum.ok_or_else(|| {
                    RunnerError::Usage("Round Robin needs --quantum".to_string())
                })?;
                (Policy::RoundRobin { quantum }, None)
            }
            Algorithm::Fcfs => (Policy::Fcfs, quantum),
            Algorithm::Sjf => (Policy::Sjf, quantum),
            Algorithm::Priority => (Policy::Priority, quantum),
        };

        Ok(Config {
            policy,
            unused_quantum,
            input,
            json,
        })
    }
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, RunnerError> {
    value.ok_or_else(|| RunnerError::Usage(format!("{flag} needs a value")))
}

/// Log level from `raw`, `warn` when unset or not a level name
pub fn log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

pub fn log_level_from_env() -> LevelFilter {
    log_level(std::env::var(LOG_ENV).ok().as_deref())
}
