use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::process_control_block::ProcessRecord;
use crate::schedule_result::ScheduleResult;
use crate::schedulers::{FcfsScheduler, PriorityScheduler, RoundRobinScheduler, SjfScheduler};

/// A scheduling policy that can simulate a process table
///
/// Implementations never modify the table and keep no state between calls.
pub trait Scheduler {
    /// Display name of the policy
    fn name(&self) -> &'static str;

    /// Simulates `table` and returns the timeline together with per-process metrics
    ///
    /// * `table` - the processes to run, metrics are returned in the same order
    fn schedule(&self, table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError>;
}

/// The scheduling algorithms, without their parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    pub fn needs_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm name is not recognised
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?}, expected one of FCFS, SJF, Priority, Round Robin",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "fcfs" | "firstcomefirstserved" => Ok(Algorithm::Fcfs),
            "sjf" | "shortestjobfirst" => Ok(Algorithm::Sjf),
            "priority" => Ok(Algorithm::Priority),
            "rr" | "roundrobin" => Ok(Algorithm::RoundRobin),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An algorithm together with everything it needs to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin { quantum: i64 },
}

impl Policy {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Policy::Fcfs => Algorithm::Fcfs,
            Policy::Sjf => Algorithm::Sjf,
            Policy::Priority => Algorithm::Priority,
            Policy::RoundRobin { .. } => Algorithm::RoundRobin,
        }
    }

    /// Builds the scheduler for this policy
    ///
    /// Fails with [`ScheduleError::InvalidQuantum`] for a Round-Robin quantum below 1.
    pub fn scheduler(&self) -> Result<Box<dyn Scheduler>, ScheduleError> {
        Ok(match *self {
            Policy::Fcfs => Box::new(FcfsScheduler),
            Policy::Sjf => Box::new(SjfScheduler),
            Policy::Priority => Box::new(PriorityScheduler),
            Policy::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)?),
        })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "Round Robin (quantum {quantum})"),
            other => f.write_str(other.algorithm().name()),
        }
    }
}
