//! merodis-bench - cached runner for the merodis benchmark executable
//!
//! Runs `merodis_benchmark` once per benchmark case, filtered to that case
//! with JSON output, and stores the `benchmarks` array under
//! `bench_results/<case>.json`. Cases with an existing result file are
//! skipped, so an interrupted run can be resumed by running again.

pub mod cases;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod naming;
pub mod runner;
pub mod status;
