//! Civil calendar date and wall-clock time types.
//!
//! Provides `CivilDate`, `CivilTime`, and the combined `CivilDateTime`,
//! the canonical input representation for all calculators. Parsing
//! validates ranges; downstream math assumes validated fields.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// A Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Days in a Gregorian month, accounting for leap years.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

impl CivilDate {
    /// Construct a date, validating month and day ranges.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} out of range")));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse "YYYY-MM-DD".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::InvalidDate(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| TimeError::InvalidDate(format!("{e}")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::InvalidDate(format!("{e}")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| TimeError::InvalidDate(format!("{e}")))?;
        Self::new(year, month, day)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time of day (24-hour, minute precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
}

impl CivilTime {
    /// Construct a time, validating hour and minute ranges.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidTime(format!("hour {hour} out of range")));
        }
        if minute > 59 {
            return Err(TimeError::InvalidTime(format!("minute {minute} out of range")));
        }
        Ok(Self { hour, minute })
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse "HH:MM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return Err(TimeError::InvalidTime(format!("expected HH:MM, got {s}")));
        }
        let hour: u32 = parts[0]
            .parse()
            .map_err(|e| TimeError::InvalidTime(format!("{e}")))?;
        let minute: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::InvalidTime(format!("{e}")))?;
        Self::new(hour, minute)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A civil date combined with a wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: CivilTime,
}

impl CivilDateTime {
    pub fn new(date: CivilDate, time: CivilTime) -> Self {
        Self { date, time }
    }

    /// Time of day as a fractional hour (e.g. 14:30 → 14.5).
    pub fn fractional_hour(&self) -> f64 {
        self.time.hour as f64 + self.time.minute as f64 / 60.0
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(
            self.date.year,
            self.date.month,
            self.date.day,
            self.fractional_hour(),
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse "YYYY-MM-DDTHH:MM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('T').collect();
        if parts.len() != 2 {
            return Err(TimeError::InvalidDate(format!(
                "expected YYYY-MM-DDTHH:MM, got {s}"
            )));
        }
        let date: CivilDate = parts[0].parse()?;
        let time: CivilTime = parts[1].parse()?;
        Ok(Self { date, time })
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}
