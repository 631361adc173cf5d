//! A CPU scheduling simulation library.
//!
//! Given a table of processes (arrival time, burst time, priority) this library
//! simulates one of four classic policies on a single cpu and reports the
//! execution timeline together with the waiting and turnaround time of every
//! process.
//!
//! ```
//! use scheduler::{fcfs, ProcessRecord};
//!
//! let table = vec![ProcessRecord::new("P1", 0, 5), ProcessRecord::new("P2", 1, 3)];
//! let result = fcfs(&table).unwrap();
//!
//! assert_eq!(result.waiting_times, vec![0, 4]);
//! assert_eq!(result.average_turnaround_time(), Some(6.0));
//! ```

mod schedulers;
pub use schedulers::{FcfsScheduler, PriorityScheduler, RoundRobinScheduler, SjfScheduler};

mod scheduler;
pub use crate::scheduler::{Algorithm, Policy, Scheduler, UnknownAlgorithm};

mod common_types;
pub use crate::common_types::{ExecutionSegment, Timeline, Timestamp};

mod error;
pub use crate::error::{RecordDefect, ScheduleError};

mod process_control_block;
pub use crate::process_control_block::ProcessRecord;

mod schedule_result;
pub use crate::schedule_result::{Averages, ResultRow, ScheduleResult};

mod collector;
mod common_funcs;

/// Runs the First-Come-First-Served policy
///
/// * `table` - the processes to schedule; results come back in the same order
pub fn fcfs(table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
    FcfsScheduler.schedule(table)
}

/// Runs the non-preemptive Shortest-Job-First policy
///
/// * `table` - the processes to schedule; results come back in the same order
pub fn sjf(table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
    SjfScheduler.schedule(table)
}

/// Runs the non-preemptive Priority policy, lower values are more urgent
///
/// * `table` - the processes to schedule; results come back in the same order
pub fn priority(table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
    PriorityScheduler.schedule(table)
}

/// Runs the Round Robin policy
///
/// * `table` - the processes to schedule; results come back in the same order
/// * `quantum` - the time quanta a process can run before it is preempted,
///               anything below 1 is rejected with [`ScheduleError::InvalidQuantum`]
pub fn round_robin(table: &[ProcessRecord], quantum: i64) -> Result<ScheduleResult, ScheduleError> {
    RoundRobinScheduler::new(quantum)?.schedule(table)
}

/// Runs whichever policy `policy` names
pub fn run(policy: Policy, table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
    policy.scheduler()?.schedule(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::new("P1", 2, 6).with_priority(3),
            ProcessRecord::new("P2", 0, 4).with_priority(2),
            ProcessRecord::new("P3", 1, 2).with_priority(1),
        ]
    }

    #[test]
    fn policies_do_not_reorder_the_callers_table() {
        let table = table();
        let before = table.clone();

        fcfs(&table).unwrap();
        priority(&table).unwrap();
        round_robin(&table, 2).unwrap();
        sjf(&table).unwrap();

        assert_eq!(table, before);
    }

    #[test]
    fn results_do_not_depend_on_earlier_calls() {
        let table = table();
        let alone = sjf(&table).unwrap();

        fcfs(&table).unwrap();
        priority(&table).unwrap();

        assert_eq!(sjf(&table).unwrap(), alone);
    }

    #[test]
    fn run_dispatches_by_policy() {
        let table = table();

        assert_eq!(run(Policy::Fcfs, &table).unwrap(), fcfs(&table).unwrap());
        assert_eq!(run(Policy::Sjf, &table).unwrap(), sjf(&table).unwrap());
        assert_eq!(run(Policy::Priority, &table).unwrap(), priority(&table).unwrap());
        assert_eq!(
            run(Policy::RoundRobin { quantum: 3 }, &table).unwrap(),
            round_robin(&table, 3).unwrap()
        );
    }

    #[test]
    fn round_robin_reports_invalid_quantum() {
        let table = table();

        assert_eq!(
            round_robin(&table, 0).unwrap_err(),
            ScheduleError::InvalidQuantum { quantum: 0 }
        );
        assert_eq!(
            run(Policy::RoundRobin { quantum: -1 }, &table).unwrap_err(),
            ScheduleError::InvalidQuantum { quantum: -1 }
        );
    }

    #[test]
    fn every_policy_rejects_an_empty_table() {
        assert_eq!(fcfs(&[]).unwrap_err(), ScheduleError::EmptyInput);
        assert_eq!(sjf(&[]).unwrap_err(), ScheduleError::EmptyInput);
        assert_eq!(priority(&[]).unwrap_err(), ScheduleError::EmptyInput);
        assert_eq!(round_robin(&[], 1).unwrap_err(), ScheduleError::EmptyInput);
    }
}
