//! Fib Core: a timed iterative Fibonacci micro-benchmark
//!
//! This crate holds everything the `fib-bench` binary measures and prints,
//! with no process or argument handling of its own.
//!
//! # Modules
//!
//! - `fib`: the two-accumulator Fibonacci recurrence (wrapping and checked)
//! - `clock`: raw monotonic nanoseconds
//! - `timing`: wraps a computation between two clock reads
//! - `report`: renders a measurement as plain text, a BENCH line, or JSON

pub mod clock;
pub mod fib;
pub mod report;
pub mod timing;

pub use clock::monotonic_nanos;
pub use fib::{FibError, MAX_EXACT_INDEX, checked_fib, fib};
pub use report::{ReportFormat, ReportFormatError, write_report};
pub use timing::{Measurement, measure, measure_repeated, measure_with};

/// Index computed when nothing else is requested
pub const DEFAULT_N: i64 = 50;
