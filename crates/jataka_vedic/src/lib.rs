//! Zodiac sign and nakshatra reference data, lookups, and interpretive
//! text tables.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees.
//! Within each sign, three nakshatra segments subdivide the 30 degrees
//! (27 nakshatras over the full circle, nine of which straddle a sign
//! boundary and appear in two adjacent signs).
//!
//! All lookups are pure functions over `const` tables.

pub mod nakshatra;
pub mod sign;
pub mod texts;
pub mod util;

pub use nakshatra::{
    ALL_NAKSHATRAS, Nakshatra, NakshatraPlacement, NakshatraSegment, SEGMENTS, nakshatra_for,
};
pub use sign::{ALL_SIGNS, Element, MoonPosition, Planet, Sign, sign_from_longitude};
pub use texts::{daily_rashifol, moon_traits, ordinal_suffix, transit_message};
pub use util::normalize_360;
