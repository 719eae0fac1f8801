//! Report rendering
//!
//! - `plain` → `Found answer: <value>` / `Elapsed: <ms>`
//! - `bench` → `BENCH:fibonacci:<name>:<value>:<ms>`, the line format the
//!   cross-language benchmark harness greps for
//! - `json` → one JSON object per run

use crate::timing::Measurement;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Two human-readable lines (default)
    #[default]
    Plain,
    /// Single `BENCH:` line
    Bench,
    /// Single-line JSON object
    Json,
}

/// Unrecognized format name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormatError(String);

impl std::fmt::Display for ReportFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown report format '{}' (expected plain, bench or json)",
            self.0
        )
    }
}

impl std::error::Error for ReportFormatError {}

impl FromStr for ReportFormat {
    type Err = ReportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(ReportFormat::Plain),
            "bench" => Ok(ReportFormat::Bench),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportFormatError(s.to_string())),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    n: i64,
    repeat: u32,
    answer: i64,
    elapsed_ms: u64,
    elapsed_ns: u64,
}

/// Benchmark name used by the `bench` and `json` formats
pub fn bench_name(n: i64, repeat: u32) -> String {
    if repeat > 1 {
        format!("fib-fast-{}-x{}", n, repeat)
    } else {
        format!("fib-fast-{}", n)
    }
}

/// Write `measurement` to `out` in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    format: ReportFormat,
    n: i64,
    repeat: u32,
    measurement: &Measurement,
) -> io::Result<()> {
    match format {
        ReportFormat::Plain => {
            writeln!(out, "Found answer: {}", measurement.value)?;
            writeln!(out, "Elapsed: {}", measurement.elapsed_millis())?;
        }
        ReportFormat::Bench => {
            writeln!(
                out,
                "BENCH:fibonacci:{}:{}:{}",
                bench_name(n, repeat),
                measurement.value,
                measurement.elapsed_millis()
            )?;
        }
        ReportFormat::Json => {
            let name = bench_name(n, repeat);
            let report = JsonReport {
                name: &name,
                n,
                repeat,
                answer: measurement.value,
                elapsed_ms: measurement.elapsed_millis(),
                elapsed_ns: measurement.elapsed_nanos,
            };
            serde_json::to_writer(&mut *out, &report).map_err(io::Error::other)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
