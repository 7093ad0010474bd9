//! Cached benchmark runner
//!
//! Walks the configured case list in order. A case whose result file already
//! exists is skipped; otherwise the executor runs it and the `benchmarks`
//! array of its report is written to the result file. The first failure
//! aborts the run.

use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::executor::BenchmarkExecutor;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Key of the per-iteration records in the executable's JSON report
pub const BENCHMARKS_KEY: &str = "benchmarks";

/// What happened to one case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Result file already present, executable not invoked
    Skipped,
    /// Executable ran and the result file was written
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub case: String,
    pub result_path: PathBuf,
    pub outcome: CaseOutcome,
}

/// Per-case outcomes of a finished run, in run order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    pub fn completed(&self) -> usize {
        self.count(CaseOutcome::Completed)
    }

    pub fn skipped(&self) -> usize {
        self.count(CaseOutcome::Skipped)
    }

    fn count(&self, outcome: CaseOutcome) -> usize {
        self.cases.iter().filter(|c| c.outcome == outcome).count()
    }
}

/// Result of [`BenchRunner::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The executable was not found; nothing ran and nothing was written
    ExecutableMissing(PathBuf),
    /// Every case was either skipped or completed
    Finished(RunSummary),
}

/// Runs benchmark cases through an executor and caches their results
pub struct BenchRunner<E> {
    config: RunnerConfig,
    executor: E,
}

impl<E: BenchmarkExecutor> BenchRunner<E> {
    pub fn new(config: RunnerConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Consume the runner, returning its executor
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Run every configured case in order
    ///
    /// # Errors
    /// Returns the first executor, parse or filesystem error. Cases after
    /// the failing one are not attempted and no result file is written for
    /// the failing case.
    pub fn run(&mut self) -> Result<RunStatus> {
        if !self.config.executable.is_file() {
            println!("benchmark executable does not exist");
            warn!(executable = %self.config.executable.display(), "benchmark executable missing");
            return Ok(RunStatus::ExecutableMissing(self.config.executable.clone()));
        }

        self.config.validate()?;

        if self.config.create_results_dir {
            fs::create_dir_all(&self.config.results_dir).map_err(|source| {
                RunnerError::CreateResultsDir {
                    path: self.config.results_dir.clone(),
                    source,
                }
            })?;
        }

        let cases = self.config.cases.clone();
        let mut summary = RunSummary::default();
        for case in &cases {
            summary.cases.push(self.run_case(case)?);
        }

        info!(
            completed = summary.completed(),
            skipped = summary.skipped(),
            "benchmark run finished"
        );
        Ok(RunStatus::Finished(summary))
    }

    /// Skip or run a single case
    pub fn run_case(&mut self, case: &str) -> Result<CaseReport> {
        if case.is_empty() {
            return Err(RunnerError::EmptyCaseName);
        }

        let filename = crate::naming::result_filename(case);
        println!("{}", filename);
        let result_path = self.config.results_dir.join(&filename);

        if result_path.is_file() {
            println!("{} exists, skip", result_path.display());
            return Ok(CaseReport {
                case: case.to_string(),
                result_path,
                outcome: CaseOutcome::Skipped,
            });
        }

        println!("running bench {}...", case);
        let report = self.executor.run_case(case)?;
        let benchmarks = extract_benchmarks(case, report)?;
        write_result(&result_path, &benchmarks)?;
        println!("bench {} results dumped completed!", case);

        Ok(CaseReport {
            case: case.to_string(),
            result_path,
            outcome: CaseOutcome::Completed,
        })
    }
}

/// Take the `benchmarks` value out of an executable report
pub fn extract_benchmarks(case: &str, mut report: Value) -> Result<Value> {
    let benchmarks = report
        .get_mut(BENCHMARKS_KEY)
        .map(Value::take)
        .ok_or_else(|| RunnerError::MissingBenchmarks {
            case: case.to_string(),
        })?;

    match &benchmarks {
        Value::Array(records) if records.is_empty() => {
            warn!(case, "benchmark report has no records; filter matched nothing?")
        }
        Value::Array(records) => debug!(case, records = records.len(), "benchmark records"),
        other => warn!(case, kind = ?other, "\"benchmarks\" is not an array, storing as-is"),
    }

    Ok(benchmarks)
}

/// Write `value` to a new file at `path`; an existing file is an error
fn write_result(path: &Path, value: &Value) -> Result<()> {
    let to_error = |source: io::Error| RunnerError::WriteResult {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(to_error)?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)
        .map_err(io::Error::from)
        .and_then(|()| writer.flush())
        .map_err(to_error)
}
