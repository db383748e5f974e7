//! High-level readings over the jataka crates.
//!
//! Composes the truncated moon-longitude theory, the sign and nakshatra
//! lookups, the transit message table, and the numerology readings into
//! a single birth-profile call. Callers supply every instant explicitly;
//! nothing in this crate reads a clock.
//!
//! # Quick start
//!
//! ```rust
//! use jataka_kundali::*;
//!
//! let birth: CivilDateTime = "1990-07-15T08:45".parse().unwrap();
//! let now: CivilDateTime = "2026-08-25T12:00".parse().unwrap();
//!
//! let profile = birth_profile("John Smith", &birth, &now).unwrap();
//! println!("Moon in {} ({} pada {})",
//!     profile.moon.sign.name(),
//!     profile.nakshatra.nakshatra.name(),
//!     profile.nakshatra.pada);
//! ```

pub mod error;
pub mod natal;
pub mod profile;
pub mod transit;

pub use error::KundaliError;
pub use natal::{natal_moon, natal_nakshatra};
pub use profile::{BirthProfile, birth_profile};
pub use transit::{summarize_transit, transit_distance};

// Re-export the types callers receive so `use jataka_kundali::*` suffices.
pub use jataka_numerology::{NumerologyError, NumerologyNumber, NumerologyResult};
pub use jataka_time::{CivilDate, CivilDateTime, CivilTime, TimeError};
pub use jataka_vedic::{ALL_SIGNS, MoonPosition, Nakshatra, NakshatraPlacement, Sign};
