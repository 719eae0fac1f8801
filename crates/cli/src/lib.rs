//! fib-bench: the driver behind the `fib-bench` binary
//!
//! Resolves a [`config::BenchConfig`], runs the timed computation and writes
//! the report. Process concerns (argument parsing, logging setup, exit
//! codes) stay in `main.rs`.

pub mod config;
pub mod runner;

pub use config::{BenchConfig, ConfigError, Overrides};
pub use runner::{Outcome, RunError, run};
