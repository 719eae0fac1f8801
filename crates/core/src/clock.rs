//! Monotonic clock
//!
//! Durations are measured against a monotonic source, never wall-clock
//! time, so a clock adjustment mid-run cannot produce a negative elapsed
//! value.

/// Get raw monotonic nanoseconds from the system clock.
///
/// On Unix: Uses `clock_gettime(CLOCK_MONOTONIC)` directly to get absolute
/// nanoseconds since boot.
///
/// Elsewhere: Falls back to `Instant::now()` with a process-wide base time.
#[inline]
#[cfg(unix)]
pub fn monotonic_nanos() -> u64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: ts is a valid pointer to a timespec struct
    unsafe {
        libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts);
    }
    // tv_sec/tv_nsec types vary by platform
    #[allow(clippy::unnecessary_cast)]
    let secs = (ts.tv_sec as u64).saturating_mul(1_000_000_000);
    #[allow(clippy::unnecessary_cast)]
    secs.saturating_add(ts.tv_nsec as u64)
}

/// Fallback using Instant with a process-wide base time.
#[inline]
#[cfg(not(unix))]
pub fn monotonic_nanos() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static BASE: OnceLock<Instant> = OnceLock::new();
    let base = BASE.get_or_init(Instant::now);
    base.elapsed().as_nanos().try_into().unwrap_or(u64::MAX)
}
