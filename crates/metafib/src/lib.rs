//! # metafib
//!
//! Generation and analysis of self-referential ("meta-Fibonacci")
//! integer sequences: the Conway and Conolly recurrences and the
//! two-parameter V_{s,j} family, together with the structural lemma
//! battery conjectured to govern V_{s,j} and its frequency sequence.
//!
//! Sequences are plain 1-indexed `i64` buffers owned by the caller;
//! slot 0 holds a sentinel. The typical pipeline: generate initial
//! conditions, let the recurrence engine fill the buffer in place,
//! derive the frequency sequence, then check the lemma battery.
//!
//! ## Modules
//!
//! - [`recurrence`] — generic `<a, b, c, d>` engine, Conolly / Conway /
//!   V_{s,j} specializations, k-fold self-composition
//! - [`slow`] — slowness check and frequency-sequence computation
//! - [`ics`] — minimal initial conditions for V_{s,j}
//! - [`lemmas`] — the lemma battery and its violation records
//! - [`psi`] — the psi transform over slow sequences
//! - [`count`] — closed-form factorials, permutations, combinations
//! - [`error`] — the out-of-range error and violation types

pub mod count;
pub mod error;
pub mod ics;
pub mod lemmas;
pub mod psi;
pub mod recurrence;
pub mod slow;
