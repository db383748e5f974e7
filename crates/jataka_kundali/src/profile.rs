//! Complete birth profile assembly.

use jataka_numerology::{NumerologyResult, expression, life_path, soul_urge};
use jataka_time::CivilDateTime;
use jataka_vedic::{MoonPosition, NakshatraPlacement, daily_rashifol, moon_traits};

use crate::error::KundaliError;
use crate::natal::{natal_moon, natal_nakshatra};
use crate::transit::summarize_transit;

/// Everything computed for one name and birth instant.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthProfile {
    /// Moon sign position at birth.
    pub moon: MoonPosition,
    /// Nakshatra and pada at birth.
    pub nakshatra: NakshatraPlacement,
    /// Emotional characteristics of the natal sign.
    pub traits: &'static str,
    /// Daily rashifol text for the natal sign.
    pub rashifol: &'static str,
    /// Transit summary against the supplied current instant.
    pub transit: String,
    /// Life Path reading from the birth date.
    pub life_path: NumerologyResult,
    /// Expression reading from the full name.
    pub expression: NumerologyResult,
    /// Soul Urge reading from the name's vowels.
    pub soul_urge: NumerologyResult,
}

/// Assembles the full profile for a name and birth instant.
///
/// `now` drives only the transit summary and is injected by the caller
/// so output stays deterministic under test.
pub fn birth_profile(
    full_name: &str,
    birth: &CivilDateTime,
    now: &CivilDateTime,
) -> Result<BirthProfile, KundaliError> {
    let moon = natal_moon(birth);
    let nakshatra = natal_nakshatra(&moon);
    Ok(BirthProfile {
        moon,
        nakshatra,
        traits: moon_traits(moon.sign),
        rashifol: daily_rashifol(moon.sign),
        transit: summarize_transit(moon.sign, now),
        life_path: life_path(&birth.date),
        expression: expression(full_name)?,
        soul_urge: soul_urge(full_name)?,
    })
}
