use std::fs;
use std::path::Path;

use log::debug;
use scheduler::ProcessRecord;

use crate::error::RunnerError;

/// Parses a JSON array of process records, `priority` may be omitted
pub fn parse_workload(json: &str) -> Result<Vec<ProcessRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads and parses the workload file at `path`
pub fn load_workload(path: &Path) -> Result<Vec<ProcessRecord>, RunnerError> {
    let text = fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_workload(&text).map_err(|source| RunnerError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} processes from {}", table.len(), path.display());

    Ok(table)
}

/// Workload used when no input file is given
pub fn demo_workload() -> Vec<ProcessRecord> {
    vec![
        ProcessRecord::new("P1", 0, 7).with_priority(3),
        ProcessRecord::new("P2", 2, 4).with_priority(1),
        ProcessRecord::new("P3", 4, 1).with_priority(4),
        ProcessRecord::new("P4", 5, 4).with_priority(2),
    ]
}
