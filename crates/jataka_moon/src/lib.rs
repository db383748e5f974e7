//! Truncated lunar-longitude theory and the linear ayanamsa approximation.
//!
//! This crate provides:
//! - Mean lunar elements as linear polynomials in Julian centuries
//! - A five-term periodic correction (the largest terms of the full
//!   lunar theory)
//! - Tropical → sidereal conversion via a linear Lahiri-style ayanamsa
//!
//! Accuracy is deliberately coarse (order of a degree): enough to place
//! the Moon in a 30-degree sign, not an ephemeris replacement.

pub mod ayanamsa;
pub mod longitude;

pub use ayanamsa::{AYANAMSA_J2000_DEG, AYANAMSA_RATE_DEG_PER_YEAR, ayanamsa_deg};
pub use longitude::{MoonLongitude, moon_longitude, sidereal_longitude};
