//! Benchmark executable invocation
//!
//! The runner never spawns processes itself. It asks a [`BenchmarkExecutor`]
//! for the parsed JSON report of one case; [`ProcessExecutor`] is the
//! implementation that shells out to `merodis_benchmark`.

use crate::error::{Result, RunnerError};
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs a single benchmark case and returns the executable's JSON report
pub trait BenchmarkExecutor {
    fn run_case(&mut self, case: &str) -> Result<Value>;
}

impl<F> BenchmarkExecutor for F
where
    F: FnMut(&str) -> Result<Value>,
{
    fn run_case(&mut self, case: &str) -> Result<Value> {
        self(case)
    }
}

/// Arguments restricting the executable to `case` with JSON output
pub fn filter_args(case: &str) -> [String; 2] {
    [
        format!("--benchmark_filter={}", case),
        "--benchmark_format=json".to_string(),
    ]
}

/// Path used to spawn `executable`
///
/// A bare file name is anchored to the working directory so the process
/// lookup never falls back to `PATH`.
pub fn command_path(executable: &Path) -> PathBuf {
    let mut components = executable.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Path::new(".").join(executable),
        _ => executable.to_path_buf(),
    }
}

/// Spawns the benchmark executable once per case
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    executable: PathBuf,
}

impl ProcessExecutor {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl BenchmarkExecutor for ProcessExecutor {
    fn run_case(&mut self, case: &str) -> Result<Value> {
        let program = command_path(&self.executable);
        let args = filter_args(case);
        debug!(program = %program.display(), ?args, "spawning benchmark executable");

        // Blocks until the executable exits
        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunnerError::Spawn {
                case: case.to_string(),
                executable: self.executable.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(RunnerError::NonZeroExit {
                case: case.to_string(),
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }
        if !stderr.trim().is_empty() {
            debug!(case, stderr = %stderr.trim(), "benchmark executable stderr");
        }

        debug!(case, bytes = output.stdout.len(), "benchmark output captured");
        serde_json::from_slice(&output.stdout).map_err(|source| RunnerError::InvalidJson {
            case: case.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_args() {
        let args = filter_args("RandomGet");
        assert_eq!(args[0], "--benchmark_filter=RandomGet");
        assert_eq!(args[1], "--benchmark_format=json");
    }

    #[test]
    fn test_command_path_bare_name_anchored() {
        assert_eq!(
            command_path(Path::new("merodis_benchmark")),
            Path::new(".").join("merodis_benchmark")
        );
    }

    #[test]
    fn test_command_path_keeps_explicit_paths() {
        assert_eq!(
            command_path(Path::new("build/merodis_benchmark")),
            PathBuf::from("build/merodis_benchmark")
        );
        assert_eq!(
            command_path(Path::new("/opt/bench/merodis_benchmark")),
            PathBuf::from("/opt/bench/merodis_benchmark")
        );
        assert_eq!(
            command_path(Path::new("./merodis_benchmark")),
            PathBuf::from("./merodis_benchmark")
        );
    }

    #[test]
    fn test_closure_executor() {
        let mut calls = Vec::new();
        let mut executor = |case: &str| -> Result<Value> {
            calls.push(case.to_string());
            Ok(json!({ "benchmarks": [] }))
        };

        let value = executor.run_case("SAdd").unwrap();
        assert_eq!(value["benchmarks"], json!([]));
        assert_eq!(calls, ["SAdd"]);
    }

    #[test]
    fn test_process_executor_spawn_failure() {
        let mut executor = ProcessExecutor::new("/nonexistent/merodis_benchmark");
        let err = executor.run_case("RandomGet").unwrap_err();
        assert!(matches!(err, RunnerError::Spawn { .. }));
        assert!(err.to_string().contains("RandomGet"));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use serial_test::serial;
        use tempfile::TempDir;

        fn script(dir: &TempDir, body: &str) -> PathBuf {
            let path = dir.path().join("merodis_benchmark");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        #[serial]
        fn test_process_executor_parses_stdout() {
            let dir = TempDir::new().unwrap();
            let exe = script(
                &dir,
                r#"echo "{\"args\": \"$1 $2\", \"benchmarks\": [{\"name\": \"X\"}]}""#,
            );

            let mut executor = ProcessExecutor::new(&exe);
            let value = executor.run_case("ZRank").unwrap();
            assert_eq!(
                value["args"],
                json!("--benchmark_filter=ZRank --benchmark_format=json")
            );
            assert_eq!(value["benchmarks"], json!([{ "name": "X" }]));
        }

        #[test]
        #[serial]
        fn test_process_executor_non_zero_exit() {
            let dir = TempDir::new().unwrap();
            let exe = script(&dir, "echo 'no matching benchmark' >&2\nexit 3");

            let mut executor = ProcessExecutor::new(&exe);
            let err = executor.run_case("LRange").unwrap_err();
            match err {
                RunnerError::NonZeroExit { case, status, stderr } => {
                    assert_eq!(case, "LRange");
                    assert_eq!(status.code(), Some(3));
                    assert_eq!(stderr, "no matching benchmark");
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        #[serial]
        fn test_process_executor_invalid_json() {
            let dir = TempDir::new().unwrap();
            let exe = script(&dir, "echo 'Running ./merodis_benchmark'");

            let mut executor = ProcessExecutor::new(&exe);
            let err = executor.run_case("SRem").unwrap_err();
            assert!(matches!(err, RunnerError::InvalidJson { .. }));
        }
    }
}
