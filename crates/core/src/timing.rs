//! Timed runs
//!
//! A [`Measurement`] pairs a computed answer with the monotonic time spent
//! producing it. The computation always runs strictly between the two
//! clock reads.

use crate::clock::monotonic_nanos;
use crate::fib::fib;
use tracing::debug;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Result of one timed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// The computed answer
    pub value: i64,
    /// Nanoseconds between the clock reads
    pub elapsed_nanos: u64,
}

impl Measurement {
    /// Elapsed whole milliseconds. Truncates, does not round.
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_nanos / NANOS_PER_MILLI
    }
}

/// Time `fib(n)`.
pub fn measure(n: i64) -> Measurement {
    let measurement = measure_with(|| fib(n));
    debug!(
        n,
        value = measurement.value,
        elapsed_nanos = measurement.elapsed_nanos,
        "measured fib"
    );
    measurement
}

/// Time an arbitrary computation producing an `i64`.
pub fn measure_with<F>(f: F) -> Measurement
where
    F: FnOnce() -> i64,
{
    let start = monotonic_nanos();
    let value = std::hint::black_box(f());
    let end = monotonic_nanos();

    Measurement {
        value,
        elapsed_nanos: end.saturating_sub(start),
    }
}

/// Run `f(n)` `repeat` times inside a single timed window and keep the last
/// answer. A `repeat` of zero is treated as one.
pub fn measure_repeated<F>(n: i64, repeat: u32, f: F) -> Measurement
where
    F: Fn(i64) -> i64,
{
    let repeat = repeat.max(1);
    let measurement = measure_with(|| {
        let mut value = 0;
        for _ in 0..repeat {
            value = f(std::hint::black_box(n));
        }
        value
    });
    debug!(
        n,
        repeat,
        value = measurement.value,
        elapsed_nanos = measurement.elapsed_nanos,
        "measured repeated run"
    );
    measurement
}
