//! Error types for the benchmark runner

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that abort a benchmark run
///
/// Every variant is fatal for the run: the runner stops at the case that
/// produced it and later cases are not attempted.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Benchmark case name must not be empty")]
    EmptyCaseName,

    #[error("Failed to spawn {executable} for case {case}: {source}")]
    Spawn {
        case: String,
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Benchmark executable exited with {status} for case {case}: {stderr}")]
    NonZeroExit {
        case: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Benchmark output for case {case} is not valid JSON: {source}")]
    InvalidJson {
        case: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Benchmark output for case {case} has no \"benchmarks\" key")]
    MissingBenchmarks { case: String },

    #[error("Failed to write results to {}: {source}", path.display())]
    WriteResult {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create results directory {}: {source}", path.display())]
    CreateResultsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid runner configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;
