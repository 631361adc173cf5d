use std::fs;
use std::path::PathBuf;

use log::LevelFilter;
use scheduler::{sjf, Policy, ProcessRecord, ScheduleError, ScheduleResult};

use crate::config::{self, Config};
use crate::error::RunnerError;
use crate::report::{format_averages, format_gantt, format_table, render_json, render_text};
use crate::workload::{demo_workload, load_workload, parse_workload};
use crate::run;

fn args(line: &[&str]) -> Vec<String> {
    line.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn parses_round_robin_with_quantum() {
    let config = Config::from_args(args(&["Round Robin", "--quantum", "3", "--json"])).unwrap();

    assert_eq!(config.policy, Policy::RoundRobin { quantum: 3 });
    assert_eq!(config.unused_quantum, None);
    assert!(config.json);
    assert_eq!(config.input, None);
}

#[test]
fn parses_input_path() {
    let config = Config::from_args(args(&["-i", "jobs.json", "fcfs"])).unwrap();

    assert_eq!(config.policy, Policy::Fcfs);
    assert_eq!(config.input, Some(PathBuf::from("jobs.json")));
    assert!(!config.json);
}

#[test]
fn round_robin_without_quantum_is_a_usage_error() {
    let err = Config::from_args(args(&["rr"])).unwrap_err();

    assert!(matches!(err, RunnerError::Usage(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn non_numeric_quantum_is_a_usage_error() {
    let err = Config::from_args(args(&["rr", "--quantum", "two"])).unwrap_err();
    assert!(matches!(err, RunnerError::Usage(msg) if msg.contains("two")));
}

#[test]
fn negative_quantum_is_left_to_the_scheduler() {
    let config = Config::from_args(args(&["rr", "-q", "-1"])).unwrap();
    assert_eq!(config.policy, Policy::RoundRobin { quantum: -1 });
}

#[test]
fn quantum_is_recorded_as_unused_for_other_algorithms() {
    let config = Config::from_args(args(&["SJF", "--quantum", "4"])).unwrap();

    assert_eq!(config.policy, Policy::Sjf);
    assert_eq!(config.unused_quantum, Some(4));
}

#[test]
fn rejects_bad_command_lines() {
    assert!(matches!(
        Config::from_args(args(&[])).unwrap_err(),
        RunnerError::Usage(_)
    ));
    assert!(matches!(
        Config::from_args(args(&["lottery"])).unwrap_err(),
        RunnerError::UnknownAlgorithm(_)
    ));
    assert!(matches!(
        Config::from_args(args(&["fcfs", "--verbose"])).unwrap_err(),
        RunnerError::Usage(_)
    ));
    assert!(matches!(
        Config::from_args(args(&["fcfs", "sjf"])).unwrap_err(),
        RunnerError::Usage(_)
    ));
    assert!(matches!(
        Config::from_args(args(&["fcfs", "--input"])).unwrap_err(),
        RunnerError::Usage(_)
    ));
    assert!(matches!(
        Config::from_args(args(&["--help"])).unwrap_err(),
        RunnerError::HelpRequested
    ));
}

#[test]
fn log_level_defaults_to_warn() {
    assert_eq!(config::log_level(None), LevelFilter::Warn);
    assert_eq!(config::log_level(Some("loud")), LevelFilter::Warn);
    assert_eq!(config::log_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(config::log_level(Some("OFF")), LevelFilter::Off);
}

#[test]
fn workload_priority_is_optional() {
    let table = parse_workload(
        r#"[
            {"id": "P1", "arrival_time": 0, "burst_time": 5, "priority": 2},
            {"id": "P2", "arrival_time": 1, "burst_time": 3}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        table,
        vec![
            ProcessRecord::new("P1", 0, 5).with_priority(2),
            ProcessRecord::new("P2", 1, 3),
        ]
    );
}

#[test]
fn workload_rejects_missing_burst() {
    assert!(parse_workload(r#"[{"id": "P1", "arrival_time": 0}]"#).is_err());
}

#[test]
fn load_workload_reads_file() {
    let path = std::env::temp_dir().join(format!("runner-workload-{}.json", std::process::id()));
    fs::write(&path, r#"[{"id": "A", "arrival_time": 2, "burst_time": 1}]"#).unwrap();

    let table = load_workload(&path);
    fs::remove_file(&path).unwrap();

    assert_eq!(table.unwrap(), vec![ProcessRecord::new("A", 2, 1)]);
}

#[test]
fn load_workload_reports_missing_file() {
    let err = load_workload(&PathBuf::from("/nonexistent/workload.json")).unwrap_err();

    assert!(matches!(err, RunnerError::Io { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn gantt_chart_aligns_times_with_boundaries() {
    let result = sjf(&demo_workload()).unwrap();

    assert_eq!(
        format_gantt(&result.timeline),
        "| P1 | P3 | P2 | P4 |\n0    7    8    12   16\n"
    );
}

#[test]
fn gantt_chart_shows_idle_gaps() {
    let table = vec![ProcessRecord::new("A", 0, 1), ProcessRecord::new("B", 5, 2)];
    let result = sjf(&table).unwrap();

    assert_eq!(format_gantt(&result.timeline), "| A | idle | B |\n0   1      5   7\n");
}

#[test]
fn table_lists_processes_in_input_order() {
    let table = demo_workload();
    let result = sjf(&table).unwrap();
    let text = format_table(&table, &result);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0].split_whitespace().collect::<Vec<_>>(),
        vec!["PID", "Arrival", "Burst", "Priority", "Waiting", "Turnaround"]
    );
    assert_eq!(
        lines[2].split_whitespace().collect::<Vec<_>>(),
        vec!["P2", "2", "4", "1", "6", "10"]
    );
}

#[test]
fn averages_use_two_decimals() {
    let averages = sjf(&demo_workload()).unwrap().averages().unwrap();

    assert_eq!(
        format_averages(&averages),
        "Average Waiting Time: 4.00\nAverage Turnaround Time: 8.00"
    );
}

#[test]
fn text_report_has_every_section() {
    let table = demo_workload();
    let result = sjf(&table).unwrap();
    let text = render_text(Policy::Sjf, &table, &result);

    assert!(text.starts_with("SJF\n"));
    assert!(text.contains("Average Waiting Time: 4.00"));
    assert!(text.ends_with("0    7    8    12   16\n"));
}

#[test]
fn json_report_carries_result() {
    let table = demo_workload();
    let result = sjf(&table).unwrap();
    let json = render_json(Policy::Sjf, &table, &result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["policy"], "Sjf");
    assert_eq!(value["waiting_times"], serde_json::json!([0, 6, 3, 7]));
    assert_eq!(value["timeline"][1]["process_id"], "P3");
    assert_eq!(value["timeline"][1]["start"], 7);
    assert_eq!(value["averages"]["turnaround_time"], 8.0);

    let back: ScheduleResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}

#[test]
fn run_uses_demo_workload_by_default() {
    let output = run(args(&["priority"])).unwrap();

    assert!(output.starts_with("Priority\n"));
    assert!(output.contains("| P1 | P2 | P4 | P3 |"));
}

#[test]
fn run_surfaces_invalid_quantum() {
    let err = run(args(&["rr", "--quantum", "0"])).unwrap_err();

    assert!(matches!(
        err,
        RunnerError::Schedule(ScheduleError::InvalidQuantum { quantum: 0 })
    ));
    assert_eq!(err.exit_code(), 1);
}
