//! Structural lemma battery for V_{s,j} sequences.
//!
//! Relates a computed V_{s,j} sequence to its frequency sequence
//! through the term-parity lemmas 7/8 and eleven local frequency
//! constraints (lemmas 9-19). Verification never short-circuits: every
//! violated instance across every lemma is pushed to the caller's
//! sink, and the return value is the conjunction of all checks.
//!
//! The battery is a falsification tool for conjectured constraints,
//! not a proof: minimal IC prefixes typically carry a handful of
//! startup-region violations before the constraints take hold, and the
//! sink is how those are surfaced for inspection.

use crate::error::{Lemma, Violation};

/// Checks the full lemma battery for `v` against its frequency
/// sequence `f`, pushing one [`Violation`] per disproved instance into
/// `sink`. Returns `true` iff nothing was pushed.
///
/// The full check runs only when the last entry of `v` is positive and
/// `f` is supplied; otherwise the sequence is treated as not yet
/// computed and the result is trivially `true` with nothing emitted.
/// That guard is a documented precondition, not a correctness claim
/// for incomplete input.
///
/// `f` must be the frequency sequence of `v` over its full 1-indexed
/// range (so scanned values are non-negative and every `v[n] / 2` is a
/// valid index into `f`), and `first_non_ic` the first index past the
/// IC prefix.
///
/// # Panics
///
/// Panics if the parity lemmas' lookback indices leave the buffer,
/// which cannot happen for a sequence the engine computed successfully.
pub fn check_lemmas(
    v: &[i64],
    s: i64,
    j: i64,
    f: Option<&[i64]>,
    first_non_ic: usize,
    sink: &mut Vec<Violation>,
) -> bool {
    let Some(f) = f else { return true };
    if v.last().copied().unwrap_or(0) <= 0 {
        return true;
    }

    let before = sink.len();
    check_parity(v, s, j, f, first_non_ic, sink);

    let v1 = v[1];
    // The final count belongs to the running maximum and is still
    // accumulating; every scan range stops short of it.
    let settled = f.len() as i64 - 1;
    let half = (settled - 1) / 2;

    check_lemma9(f, v1, settled, sink);
    check_lemma10(f, v1, settled, sink);
    check_lemma11(f, v1, settled, sink);
    check_lemma12(f, v1, settled, sink);
    check_lemma13(f, v1, half, sink);
    check_lemma14(f, v1, half, sink);
    check_lemma15(f, v1, half, sink);
    check_lemma16(f, v1, half, sink);
    check_lemma17(f, v1, half, sink);
    check_lemma18(f, v1, half, sink);
    check_lemma19(f, v1, half, sink);

    sink.len() == before
}

/// Frequency lookup with an i64 argument; ranges guarantee validity.
fn fv(f: &[i64], a: i64) -> i64 {
    f[a as usize]
}

/// Sequence lookup for the parity lemmas' nested lookbacks.
fn tv(v: &[i64], index: i64) -> i64 {
    assert!(index >= 0, "parity lookback fell below the buffer: {index}");
    v[index as usize]
}

/// Lemmas 7 and 8: every non-IC term splits into a mother and father
/// term straddling half its value, with the exact split dictated by
/// the term's parity and the multiplicity of its half.
fn check_parity(
    v: &[i64],
    s: i64,
    j: i64,
    f: &[i64],
    first_non_ic: usize,
    sink: &mut Vec<Violation>,
) {
    for n in first_non_ic..v.len() {
        let i = n as i64;
        let a = v[n] / 2;
        let mother = tv(v, i - s - tv(v, i - j));
        let father = tv(v, i - s - tv(v, i - 4 * j));

        let holds = if v[n] % 2 == 0 {
            (fv(f, a) > 1 && mother == a && father == a)
                || (fv(f, a) == 1 && mother == a - 1 && father == a + 1)
        } else {
            mother == a && father == a + 1
        };
        if !holds {
            sink.push(Violation {
                lemma: Lemma::Parity,
                index: i,
                message: format!(
                    "{n} -> {} ; a = {a} ; F(a) = {} ; mother = {mother} ; father = {father}",
                    v[n],
                    fv(f, a)
                ),
            });
        }
    }
}

/// Lemma 9: no two adjacent values both occur exactly once.
fn check_lemma9(f: &[i64], v1: i64, settled: i64, sink: &mut Vec<Violation>) {
    for a in v1..settled - 1 {
        if fv(f, a) == 1 && fv(f, a + 1) == 1 {
            sink.push(Violation {
                lemma: Lemma::L9,
                index: a,
                message: format!("a = {a} ; F(a) = F(a+1) = 1"),
            });
        }
    }
}

/// Lemma 10: a singleton forces F(a+2) > 1 and F(a-1) = 2.
fn check_lemma10(f: &[i64], v1: i64, settled: i64, sink: &mut Vec<Violation>) {
    for a in v1 + 1..settled - 2 {
        if fv(f, a) == 1 && !(fv(f, a + 2) > 1 && fv(f, a - 1) == 2) {
            sink.push(Violation {
                lemma: Lemma::L10,
                index: a,
                message: format!(
                    "a = {a} ; F(a) = 1 ; F(a+2) = {} ; F(a-1) = {}",
                    fv(f, a + 2),
                    fv(f, a - 1)
                ),
            });
        }
    }
}

/// Lemma 11: a singleton followed by a double forces another double.
fn check_lemma11(f: &[i64], v1: i64, settled: i64, sink: &mut Vec<Violation>) {
    for a in v1..settled - 2 {
        if fv(f, a) == 1 && fv(f, a + 1) == 2 && fv(f, a + 2) != 2 {
            sink.push(Violation {
                lemma: Lemma::L11,
                index: a,
                message: format!(
                    "a = {a} ; F(a) = 1 ; F(a+1) = 2 ; F(a+2) = {}",
                    fv(f, a + 2)
                ),
            });
        }
    }
}

/// Lemma 12: (i) four consecutive doubles never occur; (ii) two
/// consecutive triples force a double.
fn check_lemma12(f: &[i64], v1: i64, settled: i64, sink: &mut Vec<Violation>) {
    for a in v1..settled - 3 {
        if fv(f, a) == 2 && fv(f, a + 1) == 2 && fv(f, a + 2) == 2 && fv(f, a + 3) == 2 {
            sink.push(Violation {
                lemma: Lemma::L12i,
                index: a,
                message: format!("a = {a} ; F(a) = F(a+1) = F(a+2) = F(a+3) = 2"),
            });
        }
    }
    for a in v1 + 2..settled {
        if fv(f, a - 1) == 3 && fv(f, a - 2) == 3 && fv(f, a) != 2 {
            sink.push(Violation {
                lemma: Lemma::L12ii,
                index: a,
                message: format!(
                    "a = {a} ; F(a-2) = F(a-1) = 3 ; F(a) = {}",
                    fv(f, a)
                ),
            });
        }
    }
}

/// Lemma 13: a singleton doubles both of its children 2a and 2a+1.
fn check_lemma13(f: &[i64], v1: i64, half: i64, sink: &mut Vec<Violation>) {
    for a in v1..half {
        if fv(f, a) == 1 && !(fv(f, 2 * a) == 2 && fv(f, 2 * a + 1) == 2) {
            sink.push(Violation {
                lemma: Lemma::L13,
                index: a,
                message: format!(
                    "a = {a} ; F(a) = 1 ; F(2a) = {} ; F(2a+1) = {}",
                    fv(f, 2 * a),
                    fv(f, 2 * a + 1)
                ),
            });
        }
    }
}

/// Lemma 14: a triple forces F(2a) = 3 and F(2a+1) = 2.
fn check_lemma14(f: &[i64], v1: i64, half: i64, sink: &mut Vec<Violation>) {
    for a in v1..half {
        if fv(f, a) == 3 && !(fv(f, 2 * a) == 3 && fv(f, 2 * a + 1) == 2) {
            sink.push(Violation {
                lemma: Lemma::L14,
                index: a,
                message: format!(
                    "a = {a} ; F(a) = 3 ; F(2a) = {} ; F(2a+1) = {}",
                    fv(f, 2 * a),
                    fv(f, 2 * a + 1)
                ),
            });
        }
    }
}

/// Lemma 15: a singleton-then-double pair forces F(2a) = 1, F(2a+1) = 3.
fn check_lemma15(f: &[i64], v1: i64, half: i64, sink: &mut Vec<Violation>) {
    for a in v1 + 1..half {
        if fv(f, a - 1) == 1
            && fv(f, a) == 2
            && !(fv(f, 2 * a) == 1 && fv(f, 2 * a + 1) == 3)
        {
            sink.push(Violation {
                lemma: Lemma::L15,
                index: a,
                message: format!(
                    "a = {a} ; F(a-1) = 1 ; F(a) = 2 ; F(2a) = {} ; F(2a+1) = {}",
                    fv(f, 2 * a),
                    fv(f, 2 * a + 1)
                ),
            });
        }
    }
}

/// Lemma 16: the 3, 2, 3 pattern forces F(2a) = 1, F(2a+1) = 3.
fn check_lemma16(f: &[i64], v1: i64, half: i64, sink: &mut Vec<Violation>) {
    for a in v1 + 1..half {
        if fv(f, a - 1) == 3
            && fv(f, a) == 2
            && fv(f, a + 1) == 3
            && !(fv(f, 2 * a) == 1 && fv(f, 2 * a + 1) == 3)
        {
            sink.push(Violation {
                lemma: Lemma::L16,
                index: a,
                message: format!(
                    "a = {a} ; F(a-1) = 3 ; F(a) = 2 ; F(a+1) = 3 ; F(2a) = {} ; F(2a+1) = {}",
                    fv(f, 2 * a),
                    fv(f, 2 * a + 1)
                ),
            });
        }
    }
}

/// Lemma 17: the 3, 2, 1 pattern forces F(2a) = 1, F(2a+1) = 2.
fn check_lemma17(f: &[i64], v1: i64, half: i64, sink: &mut Vec<Violation>) {
    for a in v1 + 1..half {
        if fv(f, a - 1) == 3
            && fv(f, a) == 2
            && fv(f, a + 1) == 1
            && !(fv(f, 2 * a) == 1 && fv(f, 2 * a + 1) == 2)
        {
            sink.push(Violation {
                lemma: Lemma::L17,
                index: a,
                message: format!(
                    "a = {a} ; F(a-1) = 3 ; F(a) = 2 ; F(a+1) = 1 ; F(2a) = {} ; F(2a+1) = {}",
                    fv(f, 2 * a),
                    fv(f, 2 * a + 1)
                ),
            });
        }
    }
}

/// Lemma 18: a double pair entered from a non-double constrains both
/// children; the two consequents are checked and reported separately.
fn check_lemma18(f: &[i64], v1: i64, half: i64, sink: &mut Vec<Violation>) {
    for a in v1 + 2..half {
        if fv(f, a - 2) != 2 && fv(f, a - 1) == 2 && fv(f, a) == 2 {
            if fv(f, 2 * a) != 2 {
                sink.push(Violation {
                    lemma: Lemma::L18,
                    index: a,
                    message: format!(
                        "a = {a} ; F(a-2) = {} ; F(a-1) = F(a) = 2 ; F(2a) = {}",
                        fv(f, a - 2),
                        fv(f, 2 * a)
                    ),
                });
            }
            let expected = if fv(f, a + 1) == 1 { 1 } else { 2 };
            if fv(f, 2 * a + 1) != expected {
                sink.push(Violation {
                    lemma: Lemma::L18,
                    index: a,
                    message: format!(
                        "a = {a} ; F(a+1) = {} ; F(2a+1) = {}",
                        fv(f, a + 1),
                        fv(f, 2 * a + 1)
                    ),
                });
            }
        }
    }
}

/// Lemma 19: a double triple constrains F(2a) to 1 and ties F(2a+1)
/// to F(a+1); the two consequents are checked and reported separately.
fn check_lemma19(f: &[i64], v1: i64, half: i64, sink: &mut Vec<Violation>) {
    for a in v1 + 2..half {
        if fv(f, a - 2) == 2 && fv(f, a - 1) == 2 && fv(f, a) == 2 {
            if fv(f, 2 * a) != 1 {
                sink.push(Violation {
                    lemma: Lemma::L19,
                    index: a,
                    message: format!(
                        "a = {a} ; F(a-2) = F(a-1) = F(a) = 2 ; F(2a) = {}",
                        fv(f, 2 * a)
                    ),
                });
            }
            let after = fv(f, a + 1);
            if (after == 1 && fv(f, 2 * a + 1) != 2) || (after == 3 && fv(f, 2 * a + 1) != 3) {
                sink.push(Violation {
                    lemma: Lemma::L19,
                    index: a,
                    message: format!(
                        "a = {a} ; F(a+1) = {after} ; F(2a+1) = {}",
                        fv(f, 2 * a + 1)
                    ),
                });
            }
        }
    }
}
