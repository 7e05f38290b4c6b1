//! Slowness checking and frequency-sequence computation.
//!
//! A sequence is slow when every consecutive difference is 0 or 1; a
//! frequency sequence counts how often each value occurs within an
//! index range of another sequence.

/// Scans a 1-indexed sequence for the first non-slow step.
///
/// Returns the first index n >= 2 where `a[n] - a[n-1]` is not 0 or 1,
/// or `None` if the sequence is slow throughout. The difference between
/// slot 0 (the sentinel) and slot 1 is ignored.
pub fn is_slow(a: &[i64]) -> Option<usize> {
    for n in 2..a.len() {
        let step = a[n] - a[n - 1];
        if step != 0 && step != 1 {
            return Some(n);
        }
    }
    None
}

/// Computes the frequency sequence of `a` over `[start, end)`.
///
/// Returns `f` with `f[v]` = number of occurrences of `v` in the
/// scanned range, sized to the maximum value observed plus one.
/// Returns `None` if any scanned value is negative (distinct from a
/// buffer of zero counts). Values that would exceed the buffer bound
/// are skipped rather than treated as an error, which tolerates
/// scanning IC-only prefixes whose true value bound is provisional.
///
/// # Panics
///
/// Panics if `start > end` or `end > a.len()`.
pub fn freq_seq(a: &[i64], start: usize, end: usize) -> Option<Vec<i64>> {
    let mut max = 0_i64;
    for &value in &a[start..end] {
        if value < 0 {
            return None;
        }
        max = max.max(value);
    }

    let mut freq = vec![0_i64; max as usize + 1];
    for &value in &a[start..end] {
        let slot = value as usize;
        if slot < freq.len() {
            freq[slot] += 1;
        }
    }
    Some(freq)
}
