use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The single fatal failure mode of the recurrence engine.
///
/// Invalid parameters and negative inputs are reported through `None`
/// sentinels by the functions that can encounter them; only an
/// out-of-range lookup is an error, because continuing past one would
/// silently leave a corrupted partial sequence behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("recurrence lookup out of range: index {index} outside 0..={last}")]
    OutOfRange { index: i64, last: usize },
}

/// Identifies which structural lemma a violation disproves.
///
/// `Parity` covers the paired term-parity lemmas 7 and 8; the rest are
/// the eleven local frequency constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lemma {
    Parity,
    L9,
    L10,
    L11,
    L12i,
    L12ii,
    L13,
    L14,
    L15,
    L16,
    L17,
    L18,
    L19,
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Parity => "lemma 7/8",
            Self::L9 => "lemma 9",
            Self::L10 => "lemma 10",
            Self::L11 => "lemma 11",
            Self::L12i => "lemma 12(i)",
            Self::L12ii => "lemma 12(ii)",
            Self::L13 => "lemma 13",
            Self::L14 => "lemma 14",
            Self::L15 => "lemma 15",
            Self::L16 => "lemma 16",
            Self::L17 => "lemma 17",
            Self::L18 => "lemma 18",
            Self::L19 => "lemma 19",
        };
        write!(f, "{s}")
    }
}

/// A single disproved lemma instance.
///
/// `index` is the sequence position n for the parity lemmas and the
/// frequency argument a for lemmas 9-19; `message` carries the values
/// that disproved the constraint.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub lemma: Lemma,
    pub index: i64,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} // {}", self.message, self.lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = SequenceError::OutOfRange { index: -2, last: 59 };
        let s = err.to_string();
        assert!(s.contains("-2"));
        assert!(s.contains("0..=59"));
    }

    #[test]
    fn violation_display_names_lemma() {
        let v = Violation {
            lemma: Lemma::L9,
            index: 5,
            message: "a = 5 ; F(a) = F(a+1) = 1".to_string(),
        };
        let s = v.to_string();
        assert!(s.contains("lemma 9"));
        assert!(s.contains("F(a) = F(a+1) = 1"));
    }

    #[test]
    fn parity_and_split_lemma_display() {
        assert_eq!(Lemma::Parity.to_string(), "lemma 7/8");
        assert_eq!(Lemma::L12i.to_string(), "lemma 12(i)");
        assert_eq!(Lemma::L12ii.to_string(), "lemma 12(ii)");
    }
}
