//! Nakshatra (lunar mansion) lookup keyed by sign and degree.
//!
//! The 27 nakshatras are laid out as 36 segments, three per sign: nine
//! nakshatras straddle a sign boundary and appear as two segments
//! sharing one name. Segment boundaries use two-decimal degree values
//! (13.33, 26.67, ...) rather than exact thirds, so placements match
//! the classical rounded tables.
//!
//! Each nakshatra has 4 padas (quarters). The pada is computed over the
//! containing segment's own span, so a straddling nakshatra restarts
//! its quarter count in the second sign.

use crate::sign::Sign;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishta => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// One nakshatra segment within a sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraSegment {
    /// The nakshatra this segment belongs to.
    pub nakshatra: Nakshatra,
    /// The sign containing the segment.
    pub sign: Sign,
    /// Segment start in degrees within the sign.
    pub start_deg: f64,
    /// Segment end in degrees within the sign.
    pub end_deg: f64,
}

const fn seg(nakshatra: Nakshatra, sign: Sign, start_deg: f64, end_deg: f64) -> NakshatraSegment {
    NakshatraSegment {
        nakshatra,
        sign,
        start_deg,
        end_deg,
    }
}

/// The 36 nakshatra segments, three per sign in sign order.
#[rustfmt::skip]
pub const SEGMENTS: [NakshatraSegment; 36] = [
    seg(Nakshatra::Ashwini,          Sign::Aries,       0.0,   13.33),
    seg(Nakshatra::Bharani,          Sign::Aries,       13.33, 26.67),
    seg(Nakshatra::Krittika,         Sign::Aries,       26.67, 30.0),
    seg(Nakshatra::Krittika,         Sign::Taurus,      0.0,   10.0),
    seg(Nakshatra::Rohini,           Sign::Taurus,      10.0,  23.33),
    seg(Nakshatra::Mrigashira,       Sign::Taurus,      23.33, 30.0),
    seg(Nakshatra::Mrigashira,       Sign::Gemini,      0.0,   6.67),
    seg(Nakshatra::Ardra,            Sign::Gemini,      6.67,  20.0),
    seg(Nakshatra::Punarvasu,        Sign::Gemini,      20.0,  30.0),
    seg(Nakshatra::Punarvasu,        Sign::Cancer,      0.0,   3.33),
    seg(Nakshatra::Pushya,           Sign::Cancer,      3.33,  16.67),
    seg(Nakshatra::Ashlesha,         Sign::Cancer,      16.67, 30.0),
    seg(Nakshatra::Magha,            Sign::Leo,         0.0,   13.33),
    seg(Nakshatra::PurvaPhalguni,    Sign::Leo,         13.33, 26.67),
    seg(Nakshatra::UttaraPhalguni,   Sign::Leo,         26.67, 30.0),
    seg(Nakshatra::UttaraPhalguni,   Sign::Virgo,       0.0,   10.0),
    seg(Nakshatra::Hasta,            Sign::Virgo,       10.0,  23.33),
    seg(Nakshatra::Chitra,           Sign::Virgo,       23.33, 30.0),
    seg(Nakshatra::Chitra,           Sign::Libra,       0.0,   6.67),
    seg(Nakshatra::Swati,            Sign::Libra,       6.67,  20.0),
    seg(Nakshatra::Vishakha,         Sign::Libra,       20.0,  30.0),
    seg(Nakshatra::Vishakha,         Sign::Scorpio,     0.0,   3.33),
    seg(Nakshatra::Anuradha,         Sign::Scorpio,     3.33,  16.67),
    seg(Nakshatra::Jyeshtha,         Sign::Scorpio,     16.67, 30.0),
    seg(Nakshatra::Mula,             Sign::Sagittarius, 0.0,   13.33),
    seg(Nakshatra::PurvaAshadha,     Sign::Sagittarius, 13.33, 26.67),
    seg(Nakshatra::UttaraAshadha,    Sign::Sagittarius, 26.67, 30.0),
    seg(Nakshatra::UttaraAshadha,    Sign::Capricorn,   0.0,   10.0),
    seg(Nakshatra::Shravana,         Sign::Capricorn,   10.0,  23.33),
    seg(Nakshatra::Dhanishta,        Sign::Capricorn,   23.33, 30.0),
    seg(Nakshatra::Dhanishta,        Sign::Aquarius,    0.0,   6.67),
    seg(Nakshatra::Shatabhisha,      Sign::Aquarius,    6.67,  20.0),
    seg(Nakshatra::PurvaBhadrapada,  Sign::Aquarius,    20.0,  30.0),
    seg(Nakshatra::PurvaBhadrapada,  Sign::Pisces,      0.0,   3.33),
    seg(Nakshatra::UttaraBhadrapada, Sign::Pisces,      3.33,  16.67),
    seg(Nakshatra::Revati,           Sign::Pisces,      16.67, 30.0),
];

/// Nakshatra and pada for a moon placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NakshatraPlacement {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra's segment, 1-4.
    pub pada: u8,
}

/// Determine nakshatra and pada from a sign and degree within it.
///
/// The pada divides the containing segment into four equal quarters, so
/// segments of different lengths have different pada spans.
pub fn nakshatra_for(sign: Sign, degree_in_sign: f64) -> NakshatraPlacement {
    for segment in &SEGMENTS {
        if segment.sign == sign
            && degree_in_sign >= segment.start_deg
            && degree_in_sign < segment.end_deg
        {
            let span = segment.end_deg - segment.start_deg;
            let position = degree_in_sign - segment.start_deg;
            let pada_idx = ((position / span) * 4.0).floor() as u8;
            return NakshatraPlacement {
                nakshatra: segment.nakshatra,
                pada: pada_idx.min(3) + 1,
            };
        }
    }

    // Unreachable for degree in [0, 30): the segments partition each sign.
    NakshatraPlacement {
        nakshatra: Nakshatra::Ashwini,
        pada: 1,
    }
}
