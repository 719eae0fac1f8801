//! Timed driver
//!
//! Measures the configured computation, writes the report, then checks the
//! answer against `expect`. The report is always written before the check so
//! a mismatch still shows what was computed.

use crate::config::BenchConfig;
use fib_core::{FibError, checked_fib, fib, measure, measure_repeated, write_report};
use std::io::Write;
use tracing::{debug, warn};

/// Error from a benchmark run
#[derive(Debug)]
pub enum RunError {
    /// The requested index is out of range for exact computation
    Fib(FibError),
    /// Writing the report failed
    Io(std::io::Error),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Fib(e) => write!(f, "{}", e),
            RunError::Io(e) => write!(f, "cannot write report: {}", e),
        }
    }
}

impl std::error::Error for RunError {}

impl From<FibError> for RunError {
    fn from(e: FibError) -> Self {
        RunError::Fib(e)
    }
}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Io(e)
    }
}

/// How a completed run compared against the expected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No expectation was set, or the answer matched it
    Ok { answer: i64 },
    /// The answer differed from `expect`
    Mismatch { expected: i64, got: i64 },
}

/// Run one benchmark and write its report to `out`.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<Outcome, RunError> {
    if config.checked {
        checked_fib(config.n)?;
    }
    debug!(?config, "starting run");

    let measurement = if config.repeat > 1 {
        measure_repeated(config.n, config.repeat, fib)
    } else {
        measure(config.n)
    };

    write_report(out, config.format, config.n, config.repeat, &measurement)?;

    match config.expect {
        Some(expected) if expected != measurement.value => {
            warn!(expected, got = measurement.value, "answer mismatch");
            Ok(Outcome::Mismatch {
                expected,
                got: measurement.value,
            })
        }
        _ => Ok(Outcome::Ok {
            answer: measurement.value,
        }),
    }
}
