use log::trace;

use crate::collector::Collector;
use crate::common_types::Timestamp;
use crate::process_control_block::{ProcessControlBlock, ProcessRecord};
use crate::schedule_result::ScheduleResult;

/// Earliest arrival among the processes that still need the cpu
pub fn next_arrival(pcbs: &[ProcessControlBlock]) -> Option<Timestamp> {
    pcbs.iter()
        .filter(|pcb| !pcb.is_completed())
        .map(|pcb| pcb.arrival_time)
        .min()
}

/// Non-preemptive simulation shared by SJF and Priority
///
/// At every decision point the ready process with the smallest `key` runs to
/// completion. Equal keys go to the process met first in `pcbs`, so the order
/// of the view decides ties. With nothing ready the clock jumps straight to
/// the next arrival.
///
/// * `table` - the caller's table, used for labels and result order
/// * `pcbs` - control blocks in enumeration order
/// * `key` - selection key, smallest wins
pub fn run_to_completion_by<K, F>(
    table: &[ProcessRecord],
    mut pcbs: Vec<ProcessControlBlock>,
    key: F,
) -> ScheduleResult
where
    K: Ord,
    F: Fn(&ProcessControlBlock) -> K,
{
    let mut collector = Collector::new(table);
    let mut now = Timestamp::new(0);
    let mut completed = 0;

    while completed < pcbs.len() {
        let selected = pcbs
            .iter()
            .enumerate()
            .filter(|(_, pcb)| pcb.has_arrived(now) && !pcb.is_completed())
            .min_by_key(|(_, pcb)| key(*pcb))
            .map(|(pos, _)| pos);

        let Some(pos) = selected else {
            match next_arrival(&pcbs) {
                Some(arrival) => {
                    trace!("cpu idle [{now}, {arrival})");
                    now = arrival;
                    continue;
                }
                None => break,
            }
        };

        let burst = pcbs[pos].remaining;
        let end = collector.dispatch(&mut pcbs[pos], now, burst);
        collector.complete(&pcbs[pos], end);

        now = end;
        completed += 1;
    }

    collector.into_result()
}
