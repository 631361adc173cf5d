use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use scheduler::{ScheduleError, UnknownAlgorithm};

/// Everything that can stop the runner
#[derive(Debug)]
pub enum RunnerError {
    /// `--help` was passed
    HelpRequested,
    /// Malformed command line
    Usage(String),
    UnknownAlgorithm(UnknownAlgorithm),
    /// The workload file could not be read
    Io { path: PathBuf, source: io::Error },
    /// The workload file is not a valid JSON process table
    Json { path: PathBuf, source: serde_json::Error },
    /// The report could not be serialized
    Render(serde_json::Error),
    /// The scheduler rejected the workload
    Schedule(ScheduleError),
}

impl RunnerError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::HelpRequested => 0,
            Self::Usage(_) | Self::UnknownAlgorithm(_) => 2,
            _ => 1,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HelpRequested => write!(f, "help requested"),
            Self::Usage(msg) => write!(f, "{msg}"),
            Self::UnknownAlgorithm(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid workload in {}: {source}", path.display())
            }
            Self::Render(err) => write!(f, "cannot render report: {err}"),
            Self::Schedule(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RunnerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownAlgorithm(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Render(err) => Some(err),
            Self::Schedule(err) => Some(err),
            Self::HelpRequested | Self::Usage(_) => None,
        }
    }
}

impl From<ScheduleError> for RunnerError {
    fn from(err: ScheduleError) -> Self {
        Self::Schedule(err)
    }
}

impl From<UnknownAlgorithm> for RunnerError {
    fn from(err: UnknownAlgorithm) -> Self {
        Self::UnknownAlgorithm(err)
    }
}
