//! Error types for calendar parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating civil dates and times.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is malformed or out of range.
    InvalidDate(String),
    /// Time string is malformed or out of range.
    InvalidTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
        }
    }
}

impl Error for TimeError {}
