use std::env;
use std::process::ExitCode;

use log::{info, warn};

mod config;
mod error;
mod logger;
mod report;
mod workload;

use config::{Config, USAGE};
use error::RunnerError;

fn run<I>(args: I) -> Result<String, RunnerError>
where
    I: IntoIterator<Item = String>,
{
    let config = Config::from_args(args)?;
    if let Some(quantum) = config.unused_quantum {
        warn!("{} does not use a time quantum, ignoring {quantum}", config.policy);
    }

    let table = match &config.input {
        Some(path) => workload::load_workload(path)?,
        None => {
            info!("no --input given, using the demo workload");
            workload::demo_workload()
        }
    };

    info!("running {} on {} processes", config.policy, table.len());
    let result = scheduler::run(config.policy, &table)?;

    if config.json {
        report::render_json(config.policy, &table, &result)
    } else {
        Ok(report::render_text(config.policy, &table, &result))
    }
}

fn main() -> ExitCode {
    if let Err(err) = logger::logger_init(config::log_level_from_env()) {
        eprintln!("cannot install logger: {err}");
    }

    match run(env::args().skip(1)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(RunnerError::HelpRequested) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!("\n{USAGE}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests;
