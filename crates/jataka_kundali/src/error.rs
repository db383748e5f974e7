//! Error types for reading assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_numerology::NumerologyError;

/// Errors from assembling a birth profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum KundaliError {
    /// A numerology reading rejected the name.
    Numerology(NumerologyError),
}

impl Display for KundaliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numerology(e) => write!(f, "numerology error: {e}"),
        }
    }
}

impl Error for KundaliError {}

impl From<NumerologyError> for KundaliError {
    fn from(e: NumerologyError) -> Self {
        Self::Numerology(e)
    }
}
