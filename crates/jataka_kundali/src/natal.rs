//! Natal moon position and nakshatra placement.

use jataka_moon::sidereal_longitude;
use jataka_time::CivilDateTime;
use jataka_vedic::{MoonPosition, NakshatraPlacement, nakshatra_for, sign_from_longitude};

/// Moon sign position at a birth instant.
pub fn natal_moon(birth: &CivilDateTime) -> MoonPosition {
    sign_from_longitude(sidereal_longitude(birth))
}

/// Nakshatra and pada for a moon position.
pub fn natal_nakshatra(position: &MoonPosition) -> NakshatraPlacement {
    nakshatra_for(position.sign, position.degree_in_sign)
}
