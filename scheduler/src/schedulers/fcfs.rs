use log::{debug, trace};

use crate::collector::Collector;
use crate::common_types::Timestamp;
use crate::error::ScheduleError;
use crate::process_control_block::{load_sorted_by, ProcessRecord};
use crate::schedule_result::ScheduleResult;
use crate::scheduler::Scheduler;

/// First-Come-First-Served: processes run to completion in order of arrival,
/// equal arrivals keep their table order
#[derive(Clone, Copy, Debug, Default)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
        let mut pcbs = load_sorted_by(table, |pcb| pcb.arrival_time)?;
        debug!("{}: scheduling {} processes", self.name(), pcbs.len());

        let mut collector = Collector::new(table);
        let mut now = Timestamp::new(0);

        for pcb in pcbs.iter_mut() {
            if now < pcb.arrival_time {
                trace!("cpu idle [{now}, {})", pcb.arrival_time);
                now = pcb.arrival_time;
            }

            let burst = pcb.burst_time;
            let end = collector.dispatch(pcb, now, burst);
            collector.complete(pcb, end);
            now = end;
        }

        Ok(collector.into_result())
    }
}
