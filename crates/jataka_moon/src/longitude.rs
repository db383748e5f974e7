//! Truncated geocentric lunar longitude.
//!
//! Mean elements are linear polynomials in Julian centuries since
//! J2000.0 (higher-order terms dropped). The periodic correction keeps
//! the five largest terms of the full lunar theory: the equation of the
//! centre, evection, variation, the second-order anomaly term, and the
//! annual equation.
//!
//! Every intermediate of a computation is returned in [`MoonLongitude`]
//! and also emitted as a `tracing` trace event, so the breakdown can be
//! surfaced without touching the result type.

use jataka_time::{CivilDateTime, jd_to_centuries};
use tracing::trace;

use crate::ayanamsa::ayanamsa_deg;

/// Full breakdown of one lunar-longitude computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonLongitude {
    /// Julian Date of the instant.
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub t: f64,
    /// Mean longitude in degrees [0, 360).
    pub mean_longitude_deg: f64,
    /// Sum of the periodic correction terms, in degrees.
    pub correction_deg: f64,
    /// Tropical longitude (mean + correction) in degrees [0, 360).
    pub tropical_deg: f64,
    /// Ayanamsa for the instant's calendar year, in degrees.
    pub ayanamsa_deg: f64,
    /// Sidereal longitude (tropical - ayanamsa) in degrees [0, 360).
    pub sidereal_deg: f64,
}

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

// Mean-element linear coefficients: value at J2000.0 (deg) and rate
// (deg per Julian century).

/// Mean longitude L.
const MEAN_LONGITUDE: [f64; 2] = [218.316_447_7, 481_267.881_234_21];
/// Mean anomaly M.
const MEAN_ANOMALY: [f64; 2] = [134.963_396_4, 477_198.867_505_5];
/// Solar mean anomaly M'.
const SOLAR_MEAN_ANOMALY: [f64; 2] = [357.529_109_2, 35_999.050_290_9];
/// Argument of latitude F. Drives the latitude series, which this
/// truncation omits; kept for the diagnostic trace.
const ARGUMENT_OF_LATITUDE: [f64; 2] = [93.272_095_0, 483_202.017_523_3];

/// Evaluate a linear mean element at `t` centuries, normalized to [0, 360).
fn mean_element_deg(coeffs: &[f64; 2], t: f64) -> f64 {
    normalize_360(coeffs[0] + coeffs[1] * t)
}

/// Periodic longitude correction in degrees.
///
/// Five sinusoidal terms. Each row is [nL, nM, nM', amplitude_deg]: the
/// argument is the linear combination nL·L + nM·M + nM'·M' in radians.
fn longitude_correction_deg(l_deg: f64, m_deg: f64, m_sun_deg: f64) -> f64 {
    #[rustfmt::skip]
    static TERMS: [[f64; 4]; 5] = [
        // nL    nM    nM'   amplitude (deg)
        [ 0.0,  1.0,  0.0,  6.2886],  // equation of the centre
        [ 2.0, -1.0,  0.0,  1.2740],  // evection
        [ 2.0,  0.0,  0.0,  0.6583],  // variation
        [ 0.0,  2.0,  0.0,  0.2140],  // second-order centre
        [ 0.0,  0.0,  1.0, -0.1851],  // annual equation
    ];

    let l = l_deg.to_radians();
    let m = m_deg.to_radians();
    let m_sun = m_sun_deg.to_radians();

    let mut correction = 0.0_f64;
    for term in &TERMS {
        let angle = term[0] * l + term[1] * m + term[2] * m_sun;
        correction += term[3] * angle.sin();
    }
    correction
}

/// Compute the Moon's longitude breakdown for a civil instant.
pub fn moon_longitude(instant: &CivilDateTime) -> MoonLongitude {
    let jd = instant.to_jd();
    let t = jd_to_centuries(jd);

    let l = mean_element_deg(&MEAN_LONGITUDE, t);
    let m = mean_element_deg(&MEAN_ANOMALY, t);
    let m_sun = mean_element_deg(&SOLAR_MEAN_ANOMALY, t);
    let f = mean_element_deg(&ARGUMENT_OF_LATITUDE, t);

    let correction = longitude_correction_deg(l, m, m_sun);
    let tropical = normalize_360(l + correction);
    let ayanamsa = ayanamsa_deg(instant.date.year);
    let sidereal = normalize_360(tropical - ayanamsa);

    trace!(
        jd,
        t,
        mean_longitude_deg = l,
        mean_anomaly_deg = m,
        solar_mean_anomaly_deg = m_sun,
        argument_of_latitude_deg = f,
        correction_deg = correction,
        tropical_deg = tropical,
        ayanamsa_deg = ayanamsa,
        sidereal_deg = sidereal,
        "moon longitude"
    );

    MoonLongitude {
        jd,
        t,
        mean_longitude_deg: l,
        correction_deg: correction,
        tropical_deg: tropical,
        ayanamsa_deg: ayanamsa,
        sidereal_deg: sidereal,
    }
}

/// Convenience: sidereal lunar longitude in degrees [0, 360).
pub fn sidereal_longitude(instant: &CivilDateTime) -> f64 {
    moon_longitude(instant).sidereal_deg
}
