use serde::{Deserialize, Serialize};

use crate::common_types::Timestamp;
use crate::error::{RecordDefect, ScheduleError};

/// A process as described by the caller
///
/// Times are signed so that out-of-range rows coming from an input form can be
/// reported instead of silently wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Opaque label, expected to be unique
    pub id: String,
    /// The time when the process becomes eligible to run
    pub arrival_time: i64,
    /// Total CPU time the process needs
    pub burst_time: i64,
    /// Lower value means more urgent
    #[serde(default)]
    pub priority: i64,
}

impl ProcessRecord {
    /// Creates a record with the default priority of 0
    ///
    /// * `id` - label of the process
    /// * `arrival_time` - the time when the process arrives
    /// * `burst_time` - the time the process needs on the cpu
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        ProcessRecord {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    fn defect(&self) -> Option<RecordDefect> {
        if self.arrival_time < 0 {
            return Some(RecordDefect::NegativeArrival(self.arrival_time));
        }

        if self.burst_time <= 0 {
            return Some(RecordDefect::NonPositiveBurst(self.burst_time));
        }

        None
    }
}

/// Working state of one process during a single simulation run
#[derive(Clone, Copy, Debug)]
pub struct ProcessControlBlock {
    /// Position of the record in the caller's table
    pub index: usize,
    pub arrival_time: Timestamp,
    pub burst_time: u64,
    pub priority: i64,
    /// Burst time not yet served
    pub remaining: u64,
}

impl ProcessControlBlock {
    fn new(index: usize, record: &ProcessRecord) -> ProcessControlBlock {
        // Only called on validated records, both values are non-negative
        let burst = record.burst_time as u64;

        ProcessControlBlock {
            index,
            arrival_time: Timestamp::new(record.arrival_time as u64),
            burst_time: burst,
            priority: record.priority,
            remaining: burst,
        }
    }

    pub fn has_arrived(&self, now: Timestamp) -> bool {
        self.arrival_time <= now
    }

    pub fn is_completed(&self) -> bool {
        self.remaining == 0
    }

    /// Runs the process for at most `slice` ticks and returns the time actually used
    pub fn execute(&mut self, slice: u64) -> u64 {
        let used = slice.min(self.remaining);
        self.remaining -= used;
        used
    }
}

/// Validates the caller's table and builds one control block per record,
/// in the caller's order
pub fn load(table: &[ProcessRecord]) -> Result<Vec<ProcessControlBlock>, ScheduleError> {
    if table.is_empty() {
        return Err(ScheduleError::EmptyInput);
    }

    table
        .iter()
        .enumerate()
        .map(|(index, record)| match record.defect() {
            Some(defect) => Err(ScheduleError::InvalidProcessRecord {
                index,
                id: record.id.clone(),
                defect,
            }),
            None => Ok(ProcessControlBlock::new(index, record)),
        })
        .collect()
}

/// Like [`load`], then stable-sorted by `key`. The caller's table is left untouched.
pub fn load_sorted_by<K, F>(
    table: &[ProcessRecord],
    key: F,
) -> Result<Vec<ProcessControlBlock>, ScheduleError>
where
    K: Ord,
    F: FnMut(&ProcessControlBlock) -> K,
{
    let mut pcbs = load(table)?;
    pcbs.sort_by_key(key);
    Ok(pcbs)
}
