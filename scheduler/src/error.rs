//! Errors reported by the scheduling policies.
//!
//! Every variant describes input the caller can correct and resubmit;
//! nothing here is fatal and nothing is retried internally.

use std::error::Error;
use std::fmt;

/// Why a single process record was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordDefect {
    /// Arrival time below zero.
    NegativeArrival(i64),
    /// Burst time of zero or less.
    NonPositiveBurst(i64),
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeArrival(at) => write!(f, "arrival time {at} is negative"),
            Self::NonPositiveBurst(bt) => write!(f, "burst time {bt} is not positive"),
        }
    }
}

/// Errors from a scheduling run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    /// The process table was empty.
    EmptyInput,
    /// Round-Robin was given a quantum that is not a positive integer.
    InvalidQuantum { quantum: i64 },
    /// A record failed validation; `index` is its position in the caller's table.
    InvalidProcessRecord {
        index: usize,
        id: String,
        defect: RecordDefect,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "at least one process is required"),
            Self::InvalidQuantum { quantum } => {
                write!(f, "time quantum must be a positive integer, got {quantum}")
            }
            Self::InvalidProcessRecord { index, id, defect } => {
                write!(f, "process {id:?} (row {index}): {defect}")
            }
        }
    }
}

impl Error for ScheduleError {}
