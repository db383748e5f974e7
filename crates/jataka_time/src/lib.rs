//! Civil date/time handling and Julian Date conversion.
//!
//! This crate provides:
//! - `CivilDate` / `CivilTime` / `CivilDateTime` calendar types with
//!   validated string parsing
//! - Gregorian calendar → Julian Date conversion
//! - Julian centuries since J2000.0

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilDate, CivilDateTime, CivilTime};
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_centuries};
