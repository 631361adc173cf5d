use log::debug;

use crate::common_funcs::run_to_completion_by;
use crate::error::ScheduleError;
use crate::process_control_block::{load_sorted_by, ProcessRecord};
use crate::schedule_result::ScheduleResult;
use crate::scheduler::Scheduler;

/// Non-preemptive Shortest-Job-First
///
/// Whenever the cpu frees up, the ready process with the smallest burst time
/// runs to completion. Equal bursts go to the earliest arrival, then to table order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SjfScheduler;

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
        let pcbs = load_sorted_by(table, |pcb| pcb.arrival_time)?;
        debug!("{}: scheduling {} processes", self.name(), pcbs.len());

        Ok(run_to_completion_by(table, pcbs, |pcb| pcb.burst_time))
    }
}
