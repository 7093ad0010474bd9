use anyhow::{Context, Result};
use clap::Parser;
use merodis_bench::{
    cases,
    cli::Cli,
    config::{ConfigFile, RunnerConfig},
    executor::ProcessExecutor,
    runner::{BenchRunner, RunStatus},
    status,
};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print the contents of `dir`, one entry per line
fn print_directory_listing(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to list {}: {}", dir.display(), e);
            return;
        }
    };

    let mut rows: Vec<(String, char, u64)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let (kind, len) = match entry.metadata() {
                Ok(meta) if meta.is_dir() => ('d', meta.len()),
                Ok(meta) if meta.file_type().is_symlink() => ('l', meta.len()),
                Ok(meta) => ('-', meta.len()),
                Err(_) => ('?', 0),
            };
            (name, kind, len)
        })
        .collect();
    rows.sort();

    println!("total {}", rows.len());
    for (name, kind, len) in rows {
        println!("{} {:>12} {}", kind, len, name);
    }
}

/// Assemble the runner configuration: defaults, then config file, then flags
fn build_config(args: &Cli) -> Result<RunnerConfig> {
    let mut config = RunnerConfig::default();

    if let Some(path) = &args.config {
        config = config.merge_file(ConfigFile::from_path(path)?);
    }

    if let Some(executable) = &args.executable {
        config = config.with_executable(executable);
    }
    if let Some(dir) = &args.results_dir {
        config = config.with_results_dir(dir);
    }
    if args.create_results_dir {
        config = config.with_create_results_dir(true);
    }

    if !args.cases.is_empty() {
        config = config.with_cases(args.cases.iter().cloned());
    } else if !args.groups.is_empty() {
        config = config.with_cases(cases::case_names_in_groups(&args.groups));
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = build_config(&args)?;
    tracing::debug!(?config, "runner configuration");

    if args.list {
        config.validate()?;
        for case in status::case_statuses(&config) {
            println!("{}", case);
        }
        return Ok(());
    }

    if !args.no_listing {
        print_directory_listing(Path::new("."));
    }

    let executor = ProcessExecutor::new(&config.executable);
    let mut runner = BenchRunner::new(config, executor);
    match runner.run().context("Benchmark run aborted")? {
        RunStatus::ExecutableMissing(path) => {
            tracing::debug!("Stopping: {} not found", path.display());
        }
        RunStatus::Finished(summary) => {
            tracing::debug!(
                "{} case(s) completed, {} skipped",
                summary.completed(),
                summary.skipped()
            );
        }
    }

    Ok(())
}
