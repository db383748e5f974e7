//! Zodiac sign (rashi) data and longitude lookup.
//!
//! The 12 signs divide the ecliptic into equal 30-degree arcs, starting
//! from Aries at 0 degrees sidereal. Each sign carries its classical
//! element, ruling planet, and Western calendar date range (the date
//! range is display data for sun-sign style output, not used in any
//! computation).

use crate::util::normalize_360;

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Display name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// The seven classical ruling planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl Planet {
    /// Display name of the planet.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }
}

/// The 12 zodiac signs in ecliptic order starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Astrological symbol of the sign.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// Classical element of the sign.
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Classical ruling planet of the sign.
    pub const fn ruling_planet(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }

    /// Western calendar start of the sun-sign date range, as (month, day).
    pub const fn start_date(self) -> (u32, u32) {
        match self {
            Self::Aries => (3, 21),
            Self::Taurus => (4, 20),
            Self::Gemini => (5, 21),
            Self::Cancer => (6, 21),
            Self::Leo => (7, 23),
            Self::Virgo => (8, 23),
            Self::Libra => (9, 23),
            Self::Scorpio => (10, 23),
            Self::Sagittarius => (11, 22),
            Self::Capricorn => (12, 22),
            Self::Aquarius => (1, 20),
            Self::Pisces => (2, 19),
        }
    }

    /// Western calendar end of the sun-sign date range, as (month, day).
    pub const fn end_date(self) -> (u32, u32) {
        match self {
            Self::Aries => (4, 19),
            Self::Taurus => (5, 20),
            Self::Gemini => (6, 20),
            Self::Cancer => (7, 22),
            Self::Leo => (8, 22),
            Self::Virgo => (9, 22),
            Self::Libra => (10, 22),
            Self::Scorpio => (11, 21),
            Self::Sagittarius => (12, 21),
            Self::Capricorn => (1, 19),
            Self::Aquarius => (2, 18),
            Self::Pisces => (3, 20),
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

/// Moon placement within a sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// The sign the Moon occupies.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degree_in_sign: f64,
}

/// Determine the sign from a sidereal ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60),
/// and so on.
pub fn sign_from_longitude(sidereal_lon_deg: f64) -> MoonPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let sign_idx = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_idx = sign_idx.min(11);
    let degree_in_sign = lon - (sign_idx as f64) * 30.0;

    MoonPosition {
        sign: ALL_SIGNS[sign_idx as usize],
        sign_index: sign_idx,
        degree_in_sign,
    }
}
