use std::fmt::Write;

use serde::Serialize;

use scheduler::{Averages, ExecutionSegment, Policy, ProcessRecord, ScheduleResult, Timestamp};

use crate::error::RunnerError;

/// Everything printed by `--json`
#[derive(Serialize)]
struct JsonReport<'a> {
    policy: Policy,
    processes: &'a [ProcessRecord],
    #[serde(flatten)]
    result: &'a ScheduleResult,
    averages: Option<Averages>,
}

pub fn render_json(
    policy: Policy,
    table: &[ProcessRecord],
    result: &ScheduleResult,
) -> Result<String, RunnerError> {
    let report = JsonReport {
        policy,
        processes: table,
        result,
        averages: result.averages(),
    };

    let mut out = serde_json::to_string_pretty(&report).map_err(RunnerError::Render)?;
    out.push('\n');
    Ok(out)
}

/// Result table, averages and Gantt chart
pub fn render_text(policy: Policy, table: &[ProcessRecord], result: &ScheduleResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{policy}");
    let _ = writeln!(out);
    out.push_str(&format_table(table, result));
    let _ = writeln!(out);
    if let Some(averages) = result.averages() {
        let _ = writeln!(out, "{}", format_averages(&averages));
        let _ = writeln!(out);
    }
    out.push_str(&format_gantt(&result.timeline));

    out
}

/// One row per process, in table order
pub fn format_table(table: &[ProcessRecord], result: &ScheduleResult) -> String {
    let id_width = table
        .iter()
        .map(|record| record.id.len())
        .max()
        .unwrap_or(0)
        .max("PID".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_width$}  {:>7}  {:>5}  {:>8}  {:>7}  {:>10}",
        "PID", "Arrival", "Burst", "Priority", "Waiting", "Turnaround"
    );

    for row in result.rows(table) {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:>7}  {:>5}  {:>8}  {:>7}  {:>10}",
            row.record.id,
            row.record.arrival_time,
            row.record.burst_time,
            row.record.priority,
            row.waiting_time,
            row.turnaround_time
        );
    }

    out
}

pub fn format_averages(averages: &Averages) -> String {
    format!(
        "Average Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}",
        averages.waiting_time, averages.turnaround_time
    )
}

fn push_cell(bar: &mut String, axis: &mut String, label: &str, start: Timestamp) {
    let start = start.to_string();
    let width = label.len().max(start.len()) + 2;

    let _ = write!(bar, "{label:^width$}|");
    let _ = write!(axis, "{start:<cell$}", cell = width + 1);
}

/// Text Gantt chart: a bar of labelled cells over a time axis
///
/// Idle gaps show up as `idle` cells.
pub fn format_gantt(timeline: &[ExecutionSegment]) -> String {
    let mut bar = String::from("|");
    let mut axis = String::new();
    let mut last_end: Option<Timestamp> = None;

    for segment in timeline {
        if let Some(end) = last_end {
            if end < segment.start {
                push_cell(&mut bar, &mut axis, "idle", end);
            }
        }

        push_cell(&mut bar, &mut axis, &segment.process_id, segment.start);
        last_end = Some(segment.end);
    }

    if let Some(end) = last_end {
        axis.push_str(&end.to_string());
    }

    format!("{bar}\n{axis}\n")
}
