//! Pythagorean numerology: Life Path, Expression, and Soul Urge numbers.
//!
//! All three readings reduce a sum to a single digit by repeated decimal
//! digit summing, except that the master numbers 11, 22, and 33 are kept
//! unreduced. Life Path works on a birth date; Expression and Soul Urge
//! map a name through the fixed Pythagorean letter chart (Soul Urge uses
//! only the vowels).

pub mod chart;
pub mod error;
pub mod number;
pub mod reading;

pub use chart::{is_vowel, letter_value};
pub use error::NumerologyError;
pub use number::{ALL_NUMBERS, NumerologyNumber};
pub use reading::{NumerologyResult, expression, life_path, reduce_digits, soul_urge};
