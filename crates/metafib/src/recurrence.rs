//! Generic engine for self-referential nested recurrences.
//!
//! Sequences live in caller-owned, 1-indexed buffers: slot 0 is a
//! sentinel that is never computed (seed it with
//! [`IC_SENTINEL`](crate::ics::IC_SENTINEL) or leave it at zero), the
//! initial-condition prefix occupies slots 1.. and the engine fills the
//! rest in place. Each step performs two lookback lookups whose target
//! indices are values of earlier entries, so computation is inherently
//! sequential.

use std::ops::BitOr;

use crate::error::SequenceError;

/// Flags controlling how far the engine runs and how it reacts to an
/// out-of-range lookup. Combine with `|`:
///
/// ```
/// use metafib::recurrence::ComputeMode;
///
/// let mode = ComputeMode::ONLY_IF_SLOW | ComputeMode::TOLERANT;
/// assert!(mode.only_if_slow && mode.tolerant);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputeMode {
    /// Stop before computing a term that would follow a non-slow step.
    pub only_if_slow: bool,
    /// Convert an out-of-range overrun into an early return of the last
    /// valid index instead of an error.
    pub tolerant: bool,
}

impl ComputeMode {
    /// Compute through the full remaining range; overrun is fatal.
    pub const UNCONDITIONAL: Self = Self {
        only_if_slow: false,
        tolerant: false,
    };
    /// Stop as soon as the most recent difference is not 0 or 1.
    pub const ONLY_IF_SLOW: Self = Self {
        only_if_slow: true,
        tolerant: false,
    };
    /// Overrun returns the last computed index instead of failing.
    pub const TOLERANT: Self = Self {
        only_if_slow: false,
        tolerant: true,
    };
}

impl BitOr for ComputeMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            only_if_slow: self.only_if_slow || rhs.only_if_slow,
            tolerant: self.tolerant || rhs.tolerant,
        }
    }
}

/// Bounds-checked lookup. Slot 0 (the sentinel) is readable.
fn fetch(r: &[i64], index: i64) -> Result<i64, SequenceError> {
    if index < 0 || index as usize >= r.len() {
        return Err(SequenceError::OutOfRange {
            index,
            last: r.len().saturating_sub(1),
        });
    }
    Ok(r[index as usize])
}

fn nested_term(
    r: &[i64],
    a: i64,
    b: i64,
    c: i64,
    d: i64,
    i: i64,
) -> Result<i64, SequenceError> {
    let left = fetch(r, i - a - fetch(r, i - b)?)?;
    let right = fetch(r, i - c - fetch(r, i - d)?)?;
    Ok(left + right)
}

/// Computes an `<a, b, c, d>` nested recurrence in place, starting at
/// index `start`:
///
/// `r[i] = r[i - a - r[i - b]] + r[i - c - r[i - d]]`
///
/// Returns the last computed index. Calling again past the already
/// computed range is a no-op that returns the buffer's last index.
/// Under [`ComputeMode::ONLY_IF_SLOW`] the engine stops before the
/// first term whose two predecessors differ by something other than
/// 0 or 1 and returns the index before the break.
///
/// # Errors
///
/// [`SequenceError::OutOfRange`] when a lookup falls outside the
/// buffer, unless [`ComputeMode::TOLERANT`] converts that into an early
/// `Ok` with the last valid index.
///
/// # Panics
///
/// Panics if `r` is empty or `start` is 0 (slot 0 is the sentinel).
pub fn compute_seq(
    r: &mut [i64],
    a: i64,
    b: i64,
    c: i64,
    d: i64,
    start: usize,
    mode: ComputeMode,
) -> Result<usize, SequenceError> {
    assert!(!r.is_empty(), "sequence buffer must not be empty");
    assert!(start >= 1, "start must be >= 1; slot 0 is the sentinel");

    let last = r.len() - 1;
    let mut n = start;
    while n <= last {
        if mode.only_if_slow && n >= 2 {
            let step = r[n - 1] - r[n - 2];
            if step != 0 && step != 1 {
                break;
            }
        }
        match nested_term(r, a, b, c, d, n as i64) {
            Ok(term) => r[n] = term,
            Err(_) if mode.tolerant => return Ok(n - 1),
            Err(e) => return Err(e),
        }
        n += 1;
    }
    Ok(n - 1)
}

/// Computes a Conolly sequence, the `<s, 1, s-2, 3>` instance:
///
/// `c[i] = c[i - s - c[i - 1]] + c[i - (s - 2) - c[i - 3]]`
///
/// # Errors
///
/// Same as [`compute_seq`].
pub fn compute_conolly(
    c: &mut [i64],
    s: i64,
    start: usize,
    mode: ComputeMode,
) -> Result<usize, SequenceError> {
    compute_seq(c, s, 1, s - 2, 3, start, mode)
}

/// Computes a V_{s,j} sequence, the `<s, j, s, 4j>` instance:
///
/// `v[i] = v[i - s - v[i - j]] + v[i - s - v[i - 4j]]`
///
/// Seed the buffer with [`seed_ics`](crate::ics::seed_ics) and pass the
/// first non-IC index as `start`.
///
/// # Errors
///
/// Same as [`compute_seq`].
pub fn compute_vseq(
    v: &mut [i64],
    s: i64,
    j: i64,
    start: usize,
    mode: ComputeMode,
) -> Result<usize, SequenceError> {
    compute_seq(v, s, j, s, 4 * j, start, mode)
}

/// Applies the sequence as a self-map `k` times: `n -> r[n]`, repeated.
///
/// The final value is returned unchecked; every intermediate index is
/// bounds-checked.
///
/// # Errors
///
/// [`SequenceError::OutOfRange`] when an intermediate index falls
/// outside the buffer. There is no tolerant variant: a failure during
/// composition always propagates.
pub fn array_comp(r: &[i64], k: u32, n: i64) -> Result<i64, SequenceError> {
    let mut value = n;
    for _ in 0..k {
        value = fetch(r, value)?;
    }
    Ok(value)
}

/// Computes a Conway-style recurrence with k-fold self-composition:
///
/// `seq[n] = seq[n - a - seq^k(n - b)] + seq^(k+1)(n - b)`
///
/// where `seq^k` is [`array_comp`]. With `a = 0`, `b = 1`, `k = 1` and
/// initial conditions `[1, 1]` this is Conway's sequence
/// 1, 1, 2, 2, 3, 4, 4, 4, 5, 6, ...
///
/// Returns the last computed index; `only_if_slow` stops at the first
/// non-slow step exactly as in [`compute_seq`].
///
/// # Errors
///
/// [`SequenceError::OutOfRange`] when any lookup or composition step
/// leaves the buffer. Out-of-range here is always fatal; there is no
/// tolerant mode.
///
/// # Panics
///
/// Panics if `seq` is empty or `start` is 0.
pub fn compute_conway(
    seq: &mut [i64],
    a: i64,
    b: i64,
    k: u32,
    start: usize,
    only_if_slow: bool,
) -> Result<usize, SequenceError> {
    assert!(!seq.is_empty(), "sequence buffer must not be empty");
    assert!(start >= 1, "start must be >= 1; slot 0 is the sentinel");

    let last = seq.len() - 1;
    let mut n = start;
    while n <= last {
        if only_if_slow && n >= 2 {
            let step = seq[n - 1] - seq[n - 2];
            if step != 0 && step != 1 {
                break;
            }
        }
        let i = n as i64;
        let inner = array_comp(seq, k, i - b)?;
        let left = fetch(seq, i - a - inner)?;
        let right = array_comp(seq, k + 1, i - b)?;
        seq[n] = left + right;
        n += 1;
    }
    Ok(n - 1)
}
