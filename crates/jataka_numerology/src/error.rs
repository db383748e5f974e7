//! Error type for name-based reading input.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input errors for the name-based readings.
///
/// A reading over an empty letter set would reduce to 0, which has no
/// interpretation; such input is rejected instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumerologyError {
    /// The name contains no letters.
    NoLetters,
    /// The name contains no vowels.
    NoVowels,
}

impl Display for NumerologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLetters => write!(f, "name contains no letters"),
            Self::NoVowels => write!(f, "name contains no vowels"),
        }
    }
}

impl Error for NumerologyError {}
