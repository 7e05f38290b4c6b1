//! The psi transform over slow sequences.
//!
//! psi_j stretches a slow sequence x into a self-similar sequence y of
//! length |x| * j + 1: the first block is 1..=j, and each later block
//! of j entries continues elementwise from its predecessor, flat where
//! x repeats a value and climbing by one per slot where x steps up.

/// Applies psi_j to the slow sequence `x0`.
///
/// A leading non-positive entry in `x0` is treated as a sentinel slot
/// (as produced by [`seed_ics`](crate::ics::seed_ics)) and stripped
/// before transforming. The output is 1-indexed with slot 0 left at
/// zero. `x0` must already be slow; behavior on non-slow input is
/// unspecified.
///
/// # Panics
///
/// Panics if `j < 1` or if no terms remain after sentinel stripping.
pub fn psi(j: i64, x0: &[i64]) -> Vec<i64> {
    assert!(j >= 1, "j must be >= 1");
    assert!(!x0.is_empty(), "input sequence must not be empty");
    let x = if x0[0] <= 0 { &x0[1..] } else { x0 };
    assert!(!x.is_empty(), "input sequence has no terms after its sentinel");

    let j = j as usize;
    let mut y = vec![0_i64; x.len() * j + 1];
    for (i, slot) in y.iter_mut().enumerate().take(j + 1).skip(1) {
        *slot = i as i64;
    }

    let mut i = j + 1;
    while i < y.len() {
        let k = (i - 1) / j;
        let step = i64::from(x[k] != x[k - 1]);
        for _ in 0..j {
            y[i] = y[i - 1] + step;
            i += 1;
        }
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::get_ics;
    use crate::slow::is_slow;
    use proptest::prelude::*;

    #[test]
    fn psi_1_of_ascending_run_is_identity_shifted() {
        assert_eq!(psi(1, &[1, 2, 3, 4]), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn psi_2_stretches_blocks() {
        assert_eq!(psi(2, &[1, 1, 2, 2]), [0, 1, 2, 2, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn psi_3_mixes_flat_and_climbing_blocks() {
        assert_eq!(psi(3, &[1, 2, 2, 3]), [0, 1, 2, 3, 4, 5, 6, 6, 6, 6, 7, 8, 9]);
    }

    #[test]
    fn leading_sentinel_is_stripped() {
        assert_eq!(psi(2, &[0, 1, 1, 2, 2]), psi(2, &[1, 1, 2, 2]));
    }

    #[test]
    fn psi_of_generated_ics_is_defined() {
        let ics = get_ics(0, 2).unwrap();
        let y = psi(2, &ics);
        assert_eq!(y.len(), ics.len() * 2 + 1);
        assert_eq!(y[1], 1);
        assert_eq!(is_slow(&y), None);
    }

    #[test]
    #[should_panic(expected = "no terms after its sentinel")]
    fn sentinel_only_input_panics() {
        let _ = psi(1, &[0]);
    }

    proptest! {
        /// psi preserves slowness and produces |x| * j + 1 entries
        /// starting at 1.
        #[test]
        fn prop_psi_preserves_slowness(
            steps in proptest::collection::vec(0_i64..=1, 0..12),
            j in 1_i64..5
        ) {
            let mut x = vec![1_i64];
            for s in steps {
                x.push(x.last().copied().unwrap() + s);
            }
            let y = psi(j, &x);
            prop_assert_eq!(y.len() as i64, x.len() as i64 * j + 1);
            prop_assert_eq!(y[1], 1);
            prop_assert_eq!(is_slow(&y), None);
        }
    }
}
