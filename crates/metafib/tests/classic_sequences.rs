//! Pinned prefixes of the classical sequences the engine reproduces:
//! Conway's sequence (OEIS A004001), Hofstadter's Q (A005185), and the
//! Conolly sequence.

use metafib::error::SequenceError;
use metafib::recurrence::{ComputeMode, array_comp, compute_conolly, compute_conway, compute_seq};
use metafib::slow::is_slow;

const CONWAY_PREFIX: [i64; 30] = [
    1, 1, 2, 2, 3, 4, 4, 4, 5, 6, 7, 7, 8, 8, 8, 8, 9, 10, 11, 12, 12, 13, 14, 14, 15, 15, 15,
    16, 16, 16,
];

#[test]
fn conway_matches_the_known_prefix() {
    let mut a = vec![0_i64; 31];
    a[1] = 1;
    a[2] = 1;
    let last = compute_conway(&mut a, 0, 1, 1, 3, false).unwrap();
    assert_eq!(last, 30);
    assert_eq!(a[1..], CONWAY_PREFIX);
}

#[test]
fn conway_is_slow_so_only_if_slow_runs_to_the_end() {
    let mut a = vec![0_i64; 201];
    a[1] = 1;
    a[2] = 1;
    let last = compute_conway(&mut a, 0, 1, 1, 3, true).unwrap();
    assert_eq!(last, 200);
    assert_eq!(is_slow(&a), None);
}

#[test]
fn hofstadter_q_is_the_0_1_0_2_instance() {
    // q[n] = q[n - q[n-1]] + q[n - q[n-2]] from 1, 1.
    let mut q = vec![0_i64; 30];
    q[1] = 1;
    q[2] = 1;
    let last = compute_seq(&mut q, 0, 1, 0, 2, 3, ComputeMode::UNCONDITIONAL).unwrap();
    assert_eq!(last, 29);
    assert_eq!(
        q[1..],
        [
            1, 1, 2, 3, 3, 4, 5, 5, 6, 6, 6, 8, 8, 8, 10, 9, 10, 11, 11, 12, 12, 12, 12, 16, 14,
            14, 16, 16, 16
        ]
    );
    // The first 6 -> 8 jump makes Q non-slow at index 12.
    assert_eq!(is_slow(&q), Some(12));
}

#[test]
fn hofstadter_q_stops_at_its_first_non_slow_step() {
    let mut q = vec![0_i64; 40];
    q[1] = 1;
    q[2] = 1;
    let last = compute_seq(&mut q, 0, 1, 0, 2, 3, ComputeMode::ONLY_IF_SLOW).unwrap();
    assert_eq!(last, 12);
    assert_eq!(q[1..=12], [1, 1, 2, 3, 3, 4, 5, 5, 6, 6, 6, 8]);
    assert_eq!(q[13], 0);
}

#[test]
fn conolly_s2_from_paired_ones_is_ceil_half() {
    let mut c = vec![0_i64; 121];
    c[1..=4].copy_from_slice(&[1, 1, 2, 2]);
    let last = compute_conolly(&mut c, 2, 5, ComputeMode::ONLY_IF_SLOW).unwrap();
    assert_eq!(last, 120);
    for n in 1..=120_i64 {
        assert_eq!(c[n as usize], (n + 1) / 2);
    }
}

#[test]
fn composition_walks_the_sequence_as_a_self_map() {
    let mut a = vec![0_i64; 31];
    a[1] = 1;
    a[2] = 1;
    compute_conway(&mut a, 0, 1, 1, 3, false).unwrap();

    // a^0 is the identity on indices; each further power follows one
    // more lookup.
    assert_eq!(array_comp(&a, 0, 10).unwrap(), 10);
    assert_eq!(array_comp(&a, 1, 10).unwrap(), a[10]);
    assert_eq!(array_comp(&a, 2, 10).unwrap(), a[a[10] as usize]);
}

#[test]
fn composition_failure_is_always_fatal() {
    let a = [0, 1, 1];
    assert_eq!(
        array_comp(&a, 1, 9),
        Err(SequenceError::OutOfRange { index: 9, last: 2 })
    );
}
