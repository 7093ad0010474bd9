//! CLI argument parsing for merodis-bench

use crate::cases::CaseGroup;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "merodis-bench")]
#[command(version)]
#[command(
    about = "Run merodis_benchmark once per case and cache the JSON results",
    long_about = None
)]
pub struct Cli {
    /// Benchmark executable [default: merodis_benchmark]
    #[arg(short = 'x', long = "executable", value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Directory holding one result file per case [default: bench_results]
    #[arg(short = 'o', long = "results-dir", value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Run only these cases, in the given order (repeatable)
    #[arg(
        short = 'C',
        long = "case",
        value_name = "NAME",
        conflicts_with = "groups"
    )]
    pub cases: Vec<String>,

    /// Run only built-in cases of these groups (repeatable)
    #[arg(short = 'g', long = "group", value_enum, value_name = "GROUP")]
    pub groups: Vec<CaseGroup>,

    /// TOML configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Create the results directory if it does not exist
    #[arg(long = "create-results-dir")]
    pub create_results_dir: bool,

    /// Print each case with its result file status and exit
    #[arg(long = "list")]
    pub list: bool,

    /// Do not print the working directory listing at startup
    #[arg(long = "no-listing")]
    pub no_listing: bool,

    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["merodis-bench"]);
        assert!(cli.executable.is_none());
        assert!(cli.results_dir.is_none());
        assert!(cli.cases.is_empty());
        assert!(cli.groups.is_empty());
        assert!(!cli.create_results_dir);
        assert!(!cli.list);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_repeated_cases_keep_order() {
        let cli = Cli::parse_from(["merodis-bench", "-C", "SAdd", "--case", "RandomGet"]);
        assert_eq!(cli.cases, ["SAdd", "RandomGet"]);
    }

    #[test]
    fn test_cli_groups() {
        let cli = Cli::parse_from(["merodis-bench", "-g", "list", "--group", "sorted-set"]);
        assert_eq!(cli.groups, [CaseGroup::List, CaseGroup::SortedSet]);
    }

    #[test]
    fn test_cli_case_conflicts_with_group() {
        let result = Cli::try_parse_from(["merodis-bench", "-C", "SAdd", "-g", "set"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_unknown_group_rejected() {
        let result = Cli::try_parse_from(["merodis-bench", "--group", "hash"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_paths() {
        let cli = Cli::parse_from([
            "merodis-bench",
            "-x",
            "build/merodis_benchmark",
            "-o",
            "out",
            "--create-results-dir",
        ]);
        assert_eq!(cli.executable, Some(PathBuf::from("build/merodis_benchmark")));
        assert_eq!(cli.results_dir, Some(PathBuf::from("out")));
        assert!(cli.create_results_dir);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["merodis-bench", "--list", "--no-listing", "--debug"]);
        assert!(cli.list);
        assert!(cli.no_listing);
        assert!(cli.debug);
    }
}
