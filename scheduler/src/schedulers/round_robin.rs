use std::collections::VecDeque;
use std::num::NonZeroU64;

use log::{debug, trace};

use crate::collector::Collector;
use crate::common_types::Timestamp;
use crate::error::ScheduleError;
use crate::process_control_block::{load_sorted_by, ProcessControlBlock, ProcessRecord};
use crate::schedule_result::ScheduleResult;
use crate::scheduler::Scheduler;

/// Round Robin with a fixed time quanta
///
/// Processes take turns from a FIFO ready queue, each turn lasting at most one
/// quanta. A process is admitted to the queue once, when it has arrived; after
/// every turn the new arrivals are admitted first and then the preempted process
/// goes to the back.
///
/// Turnaround time is reported as waiting time plus burst time, the waiting time
/// being fixed at the moment a process completes.
#[derive(Clone, Copy, Debug)]
pub struct RoundRobinScheduler {
    /// The maximum time a process can run before being preempted
    quanta: NonZeroU64,
}

impl RoundRobinScheduler {
    /// Creates a Round Robin scheduler
    ///
    /// * `quantum` - the time quanta, fails with [`ScheduleError::InvalidQuantum`]
    ///               unless it is at least 1
    pub fn new(quantum: i64) -> Result<RoundRobinScheduler, ScheduleError> {
        u64::try_from(quantum)
            .ok()
            .and_then(NonZeroU64::new)
            .map(|quanta| RoundRobinScheduler { quanta })
            .ok_or(ScheduleError::InvalidQuantum { quantum })
    }

    pub fn quanta(&self) -> NonZeroU64 {
        self.quanta
    }
}

/// Enqueues, in view order, every process that has arrived by `now`, still needs
/// the cpu and was never queued before
fn admit_arrivals(
    pcbs: &[ProcessControlBlock],
    visited: &mut [bool],
    ready: &mut VecDeque<usize>,
    now: Timestamp,
) {
    for (pos, pcb) in pcbs.iter().enumerate() {
        if visited[pos] || !pcb.has_arrived(now) || pcb.is_completed() {
            continue;
        }

        trace!("t={now}: process #{} joins the ready queue", pcb.index);
        visited[pos] = true;
        ready.push_back(pos);
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&self, table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
        let mut pcbs = load_sorted_by(table, |pcb| pcb.arrival_time)?;
        debug!(
            "{}: scheduling {} processes, quanta {}",
            self.name(),
            pcbs.len(),
            self.quanta
        );

        let quanta = self.quanta.get();
        let mut collector = Collector::new(table);
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(pcbs.len());
        let mut visited = vec![false; pcbs.len()];
        let mut now = Timestamp::new(0);

        // Each pass starts with an empty queue: the cpu is idle until the next
        // process that was never admitted arrives.
        while let Some(next) = visited.iter().position(|seen| !seen) {
            let arrival = pcbs[next].arrival_time;
            if now < arrival {
                trace!("cpu idle [{now}, {arrival})");
                now = arrival;
            }
            admit_arrivals(&pcbs, &mut visited, &mut ready, now);

            while let Some(pos) = ready.pop_front() {
                now = collector.dispatch(&mut pcbs[pos], now, quanta);

                if pcbs[pos].is_completed() {
                    collector.record_waiting(&pcbs[pos], now);
                }

                admit_arrivals(&pcbs, &mut visited, &mut ready, now);

                if !pcbs[pos].is_completed() {
                    ready.push_back(pos);
                }
            }
        }

        collector.turnaround_from_waiting(&pcbs);
        Ok(collector.into_result())
    }
}
