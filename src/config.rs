//! Runner configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line flags (applied by the binary).

use crate::cases::{self, CaseGroup};
use crate::error::{Result, RunnerError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the benchmark executable, looked up in the working directory
pub const DEFAULT_EXECUTABLE: &str = "merodis_benchmark";

/// Default directory holding one JSON result file per case
pub const DEFAULT_RESULTS_DIR: &str = "bench_results";

/// Everything a [`crate::runner::BenchRunner`] needs to know
///
/// # Example
/// ```
/// use merodis_bench::config::RunnerConfig;
///
/// let config = RunnerConfig::default();
/// assert_eq!(config.cases.len(), 17);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Case names, in run order
    pub cases: Vec<String>,

    /// Directory receiving `<case>.json` result files
    pub results_dir: PathBuf,

    /// Path to the benchmark executable
    pub executable: PathBuf,

    /// Create `results_dir` before the first case instead of failing on write
    pub create_results_dir: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            cases: cases::default_case_names(),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            create_results_dir: false,
        }
    }
}

/// On-disk form of the configuration; every key is optional
///
/// # Example TOML
/// ```toml
/// executable = "build/merodis_benchmark"
/// results_dir = "bench_results"
/// create_results_dir = true
/// cases = ["RandomGet", "SAdd"]
/// ```
///
/// `groups = ["list", "sorted-set"]` selects built-in cases by data type
/// instead; an explicit `cases` list wins when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub cases: Option<Vec<String>>,
    pub groups: Option<Vec<CaseGroup>>,
    pub results_dir: Option<PathBuf>,
    pub executable: Option<PathBuf>,
    pub create_results_dir: Option<bool>,
}

impl ConfigFile {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse TOML runner configuration")
    }

    /// Load configuration from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))
    }
}

impl RunnerConfig {
    /// Override fields present in `file`
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(cases) = file.cases {
            self.cases = cases;
        } else if let Some(groups) = file.groups {
            self.cases = cases::case_names_in_groups(&groups);
        }
        if let Some(dir) = file.results_dir {
            self.results_dir = dir;
        }
        if let Some(executable) = file.executable {
            self.executable = executable;
        }
        if let Some(create) = file.create_results_dir {
            self.create_results_dir = create;
        }
        self
    }

    /// Replace the case list
    pub fn with_cases<I, S>(mut self, cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cases = cases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the results directory
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Set the executable path
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Create the results directory if it is missing
    pub fn with_create_results_dir(mut self, create: bool) -> Self {
        self.create_results_dir = create;
        self
    }

    /// Validate configuration
    ///
    /// Case names must be non-empty and unique; two names that map to the
    /// same result file are rejected too, since the second would always be
    /// skipped.
    pub fn validate(&self) -> Result<()> {
        if self.cases.iter().any(|c| c.is_empty()) {
            return Err(RunnerError::EmptyCaseName);
        }

        let mut seen = HashSet::new();
        for case in &self.cases {
            let filename = crate::naming::result_filename(case);
            if !seen.insert(filename.clone()) {
                return Err(RunnerError::InvalidConfig(format!(
                    "case {} maps to result file {} already used by an earlier case",
                    case, filename
                )));
            }
        }

        if self.executable.as_os_str().is_empty() {
            return Err(RunnerError::InvalidConfig(
                "executable path must not be empty".to_string(),
            ));
        }

        if self.results_dir.as_os_str().is_empty() {
            return Err(RunnerError::InvalidConfig(
                "results_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the result file for `case`
    pub fn result_path(&self, case: &str) -> PathBuf {
        self.results_dir.join(crate::naming::result_filename(case))
    }
}
