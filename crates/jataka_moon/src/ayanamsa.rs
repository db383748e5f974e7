//! Linear ayanamsa (tropical/sidereal offset) approximation.
//!
//! The ayanamsa is the angular offset between the tropical zodiac and the
//! sidereal zodiac. This crate uses a Lahiri-style linear approximation
//! anchored at 2000 CE rather than the full IAU precession series; the
//! rate of 0.0138 deg/year is close to the general precession rate of
//! ~50.3 arcsec/year.

/// Ayanamsa at the year 2000, in degrees.
pub const AYANAMSA_J2000_DEG: f64 = 23.85;

/// Linear ayanamsa rate in degrees per calendar year.
pub const AYANAMSA_RATE_DEG_PER_YEAR: f64 = 0.0138;

/// Ayanamsa in degrees for a calendar year.
pub fn ayanamsa_deg(year: i32) -> f64 {
    AYANAMSA_J2000_DEG + (year - 2000) as f64 * AYANAMSA_RATE_DEG_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_year_2000() {
        assert_eq!(ayanamsa_deg(2000), 23.85);
    }

    #[test]
    fn decade_before_anchor() {
        assert!((ayanamsa_deg(1990) - 23.712).abs() < 1e-12);
    }

    #[test]
    fn quarter_century_after_anchor() {
        assert!((ayanamsa_deg(2025) - 24.195).abs() < 1e-12);
    }

    #[test]
    fn monotonically_increasing() {
        let mut prev = ayanamsa_deg(1900);
        for year in 1901..=2100 {
            let aya = ayanamsa_deg(year);
            assert!(aya > prev, "ayanamsa not increasing at {year}");
            prev = aya;
        }
    }
}
