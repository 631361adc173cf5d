use log::trace;

use crate::common_types::{ExecutionSegment, Timeline, Timestamp};
use crate::process_control_block::{ProcessControlBlock, ProcessRecord};
use crate::schedule_result::ScheduleResult;

/// Gathers the timeline and per-process metrics while a policy runs.
///
/// Metrics are stored by the caller's table index, so the result lines up with
/// the input no matter how the policy ordered its own view.
pub struct Collector<'a> {
    table: &'a [ProcessRecord],
    timeline: Timeline,
    waiting: Vec<u64>,
    turnaround: Vec<u64>,
}

impl<'a> Collector<'a> {
    pub fn new(table: &'a [ProcessRecord]) -> Collector<'a> {
        Collector {
            table,
            timeline: Vec::new(),
            waiting: vec![0; table.len()],
            turnaround: vec![0; table.len()],
        }
    }

    /// Runs `pcb` from `start` for at most `slice` ticks, records the segment
    /// and returns the time at which it stopped
    pub fn dispatch(
        &mut self,
        pcb: &mut ProcessControlBlock,
        start: Timestamp,
        slice: u64,
    ) -> Timestamp {
        let used = pcb.execute(slice);
        let end = start + used;
        let id = &self.table[pcb.index].id;

        trace!("{id} runs [{start}, {end}), {} left", pcb.remaining);
        self.timeline.push(ExecutionSegment::new(id.as_str(), start, end));

        end
    }

    /// Records both metrics of a process that finished at `completion`
    pub fn complete(&mut self, pcb: &ProcessControlBlock, completion: Timestamp) {
        let turnaround = completion - pcb.arrival_time;

        self.turnaround[pcb.index] = turnaround;
        self.waiting[pcb.index] = turnaround - pcb.burst_time;
    }

    /// Records only the waiting time of a process that finished at `completion`
    pub fn record_waiting(&mut self, pcb: &ProcessControlBlock, completion: Timestamp) {
        self.waiting[pcb.index] = completion - pcb.arrival_time - pcb.burst_time;
    }

    /// Fills every turnaround time as waiting time plus burst time
    pub fn turnaround_from_waiting(&mut self, pcbs: &[ProcessControlBlock]) {
        for pcb in pcbs {
            self.turnaround[pcb.index] = self.waiting[pcb.index] + pcb.burst_time;
        }
    }

    pub fn into_result(self) -> ScheduleResult {
        ScheduleResult {
            waiting_times: self.waiting,
            turnaround_times: self.turnaround,
            timeline: self.timeline,
        }
    }
}
