use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A point on the simulated clock
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a new Timestamp object
    ///
    /// * `time` - inital value of the Timestamp
    pub fn new(time: u64) -> Timestamp {
        Timestamp(time)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Add<u64> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: u64) -> Self::Output {
        Timestamp::new(self.0 + rhs)
    }
}

impl AddAssign<u64> for Timestamp {
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}

/// Distance between two timestamps, `self` must not be earlier than `rhs`
impl Sub for Timestamp {
    type Output = u64;

    fn sub(self, rhs: Timestamp) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One contiguous slice of CPU time given to a single process
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Label of the process that ran
    pub process_id: String,
    pub start: Timestamp,
    /// Exclusive, always after `start`
    pub end: Timestamp,
}

impl ExecutionSegment {
    pub fn new(process_id: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        debug_assert!(end > start, "segment must cover at least one tick");
        ExecutionSegment {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the slice in ticks
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Execution segments in chronological order
pub type Timeline = Vec<ExecutionSegment>;
