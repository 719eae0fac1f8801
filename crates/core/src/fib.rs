//! Iterative Fibonacci
//!
//! Both entry points run the same two-accumulator recurrence: on each of `n`
//! steps, `temp = a + b; a = b; b = temp`, and the answer is `a`.
//!
//! `fib` never fails. Additions wrap, so indices past [`MAX_EXACT_INDEX`]
//! produce a wrapped value in both debug and release builds.
//! `checked_fib` reports the overflow instead.

/// Largest index whose Fibonacci number fits in an `i64`
pub const MAX_EXACT_INDEX: i64 = 92;

/// Error returned by [`checked_fib`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    /// The index was below zero
    Negative(i64),
    /// The result at this index does not fit in an `i64`
    Overflow(i64),
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::Negative(n) => write!(f, "fib: index must be non-negative, got {}", n),
            FibError::Overflow(n) => write!(
                f,
                "fib: result for index {} overflows i64 (largest exact index is {})",
                n, MAX_EXACT_INDEX
            ),
        }
    }
}

impl std::error::Error for FibError {}

/// Compute the `n`-th Fibonacci number, `fib(0) = 0`, `fib(1) = 1`.
///
/// A negative `n` runs zero iterations and returns 0.
#[inline]
pub fn fib(n: i64) -> i64 {
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 0..n {
        let temp = a.wrapping_add(b);
        a = b;
        b = temp;
    }
    a
}

/// Compute the `n`-th Fibonacci number, rejecting negative indices and
/// results that do not fit in an `i64`.
pub fn checked_fib(n: i64) -> Result<i64, FibError> {
    if n < 0 {
        return Err(FibError::Negative(n));
    }
    if n > MAX_EXACT_INDEX {
        return Err(FibError::Overflow(n));
    }

    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for i in 0..n {
        // b runs one index ahead of a, so it overflows on the last step
        // even though a (the answer) still fits.
        let temp = match a.checked_add(b) {
            Some(t) => t,
            None if i + 1 == n => {
                a = b;
                break;
            }
            None => return Err(FibError::Overflow(n)),
        };
        a = b;
        b = temp;
    }
    Ok(a)
}
