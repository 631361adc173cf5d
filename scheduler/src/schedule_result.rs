use serde::{Deserialize, Serialize};

use crate::common_types::Timeline;
use crate::process_control_block::ProcessRecord;

/// Output of one policy run
///
/// `waiting_times[i]` and `turnaround_times[i]` belong to row `i` of the table
/// the policy was called with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub waiting_times: Vec<u64>,
    pub turnaround_times: Vec<u64>,
    pub timeline: Timeline,
}

/// Mean waiting and turnaround time of a run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub waiting_time: f64,
    pub turnaround_time: f64,
}

/// One line of the result table: the input record joined with its metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultRow<'a> {
    pub record: &'a ProcessRecord,
    pub waiting_time: u64,
    pub turnaround_time: u64,
}

fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let sum: u64 = values.iter().sum();
    Some(sum as f64 / values.len() as f64)
}

impl ScheduleResult {
    /// Number of processes the result covers
    pub fn len(&self) -> usize {
        self.waiting_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting_times.is_empty()
    }

    /// `None` for an empty result
    pub fn average_waiting_time(&self) -> Option<f64> {
        mean(&self.waiting_times)
    }

    /// `None` for an empty result
    pub fn average_turnaround_time(&self) -> Option<f64> {
        mean(&self.turnaround_times)
    }

    pub fn averages(&self) -> Option<Averages> {
        Some(Averages {
            waiting_time: self.average_waiting_time()?,
            turnaround_time: self.average_turnaround_time()?,
        })
    }

    /// Pairs every record of `table` with its metrics, in table order
    ///
    /// * `table` - the same table the result was computed from
    pub fn rows<'a>(&self, table: &'a [ProcessRecord]) -> Vec<ResultRow<'a>> {
        table
            .iter()
            .zip(self.waiting_times.iter().zip(&self.turnaround_times))
            .map(|(record, (&waiting_time, &turnaround_time))| ResultRow {
                record,
                waiting_time,
                turnaround_time,
            })
            .collect()
    }

    /// The time at which the last segment ends
    pub fn makespan(&self) -> u64 {
        self.timeline.last().map_or(0, |segment| segment.end.get())
    }
}
