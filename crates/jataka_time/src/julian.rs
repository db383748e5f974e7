//! Gregorian calendar → Julian Date conversion.
//!
//! Uses the standard integer civil-calendar algorithm (Fliegel & Van
//! Flandern). Valid for proleptic Gregorian dates with year > -4800.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Convert a Gregorian calendar date plus fractional hour to Julian Date.
///
/// `hour_frac` is the time of day in hours (e.g. 14.5 for 14:30). The
/// integer part of the result flips at noon, per the JD convention.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, hour_frac: f64) -> f64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    let jdn = day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    jdn as f64 + (hour_frac - 12.0) / 24.0
}

/// Convert a Julian Date to Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
