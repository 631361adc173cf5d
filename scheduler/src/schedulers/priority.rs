use log::debug;

use crate::common_funcs::run_to_completion_by;
use crate::error::ScheduleError;
use crate::process_control_block::{load_sorted_by, ProcessRecord};
use crate::schedule_result::ScheduleResult;
use crate::scheduler::Scheduler;

/// Non-preemptive Priority scheduling, the lowest priority value is the most urgent
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, table: &[ProcessRecord]) -> Result<ScheduleResult, ScheduleError> {
        let pcbs = load_sorted_by(table, |pcb| (pcb.arrival_time, pcb.priority))?;
        debug!("{}: scheduling {} processes", self.name(), pcbs.len());

        Ok(run_to_completion_by(table, pcbs, |pcb| pcb.priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::{ExecutionSegment, Timestamp};

    fn segment(id: &str, start: u64, end: u64) -> ExecutionSegment {
        ExecutionSegment::new(id, Timestamp::new(start), Timestamp::new(end))
    }

    fn order(result: &ScheduleResult) -> Vec<&str> {
        result.timeline.iter().map(|s| s.process_id.as_str()).collect()
    }

    #[test]
    fn lower_value_runs_first() {
        let table = vec![
            ProcessRecord::new("P1", 0, 5).with_priority(2),
            ProcessRecord::new("P2", 0, 3).with_priority(1),
        ];
        let result = PriorityScheduler.schedule(&table).unwrap();

        assert_eq!(result.timeline, vec![segment("P2", 0, 3), segment("P1", 3, 8)]);
        assert_eq!(result.waiting_times, vec![3, 0]);
        assert_eq!(result.turnaround_times, vec![8, 3]);
    }

    #[test]
    fn running_process_is_not_preempted() {
        let table = vec![
            ProcessRecord::new("low", 0, 4).with_priority(9),
            ProcessRecord::new("urgent", 1, 2).with_priority(0),
            ProcessRecord::new("mid", 2, 1).with_priority(5),
        ];
        let result = PriorityScheduler.schedule(&table).unwrap();

        assert_eq!(
            result.timeline,
            vec![segment("low", 0, 4), segment("urgent", 4, 6), segment("mid", 6, 7)]
        );
        assert_eq!(result.waiting_times, vec![0, 3, 4]);
    }

    #[test]
    fn equal_priorities_go_to_earlier_arrival() {
        let table = vec![
            ProcessRecord::new("first", 0, 3).with_priority(4),
            ProcessRecord::new("b", 2, 1).with_priority(1),
            ProcessRecord::new("a", 1, 1).with_priority(1),
        ];
        let result = PriorityScheduler.schedule(&table).unwrap();

        assert_eq!(order(&result), vec!["first", "a", "b"]);
    }

    #[test]
    fn negative_priorities_are_more_urgent() {
        let table = vec![
            ProcessRecord::new("zero", 0, 1),
            ProcessRecord::new("neg", 0, 1).with_priority(-3),
        ];
        let result = PriorityScheduler.schedule(&table).unwrap();

        assert_eq!(order(&result), vec!["neg", "zero"]);
    }

    #[test]
    fn idle_until_next_arrival() {
        let table = vec![
            ProcessRecord::new("A", 0, 1).with_priority(3),
            ProcessRecord::new("B", 6, 2).with_priority(1),
        ];
        let result = PriorityScheduler.schedule(&table).unwrap();

        assert_eq!(result.timeline, vec![segment("A", 0, 1), segment("B", 6, 8)]);
        assert_eq!(result.waiting_times, vec![0, 0]);
    }

    #[test]
    fn rejects_bad_record() {
        let table = vec![ProcessRecord::new("A", 0, -1)];
        assert!(matches!(
            PriorityScheduler.schedule(&table),
            Err(ScheduleError::InvalidProcessRecord { index: 0, .. })
        ));
    }
}
