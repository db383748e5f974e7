//! The three readings: Life Path, Expression, and Soul Urge.

use jataka_time::CivilDate;

use crate::chart::{is_vowel, letter_value};
use crate::error::NumerologyError;
use crate::number::NumerologyNumber;

/// Outcome of a single reading.
#[derive(Debug, Clone, PartialEq)]
pub struct NumerologyResult {
    /// The reduced number.
    pub number: NumerologyNumber,
    /// Intermediate values in presentation order. For Life Path:
    /// reduced day, reduced month, reduced year, their total, final
    /// reduction. For the name readings: one value per counted letter,
    /// then the total, then the final reduction.
    pub trace: Vec<u32>,
    /// Interpretive text for `number`.
    pub meaning: &'static str,
}

/// Repeatedly replaces `n` by the sum of its decimal digits while
/// `n > 9`.
///
/// With `preserve_master` set, a value of exactly 11, 22, or 33 at the
/// top of an iteration is returned as is, even though it exceeds 9.
pub const fn reduce_digits(mut n: u32, preserve_master: bool) -> u32 {
    while n > 9 {
        if preserve_master && (n == 11 || n == 22 || n == 33) {
            return n;
        }
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

// Reduction of a positive total always lands in the number domain.
fn number_for(reduced: u32) -> NumerologyNumber {
    NumerologyNumber::from_value(reduced).unwrap_or(NumerologyNumber::One)
}

fn reading_from_values(mut values: Vec<u32>) -> NumerologyResult {
    let total: u32 = values.iter().sum();
    let reduced = reduce_digits(total, true);
    let number = number_for(reduced);
    values.push(total);
    values.push(reduced);
    NumerologyResult {
        number,
        trace: values,
        meaning: number.meaning(),
    }
}

/// Life Path number from a birth date.
///
/// Day, month, and year are each reduced independently (masters
/// preserved), summed, and the sum reduced again.
pub fn life_path(date: &CivilDate) -> NumerologyResult {
    let day = reduce_digits(date.day, true);
    let month = reduce_digits(date.month, true);
    let year = reduce_digits(date.year.unsigned_abs(), true);
    let total = day + month + year;
    let reduced = reduce_digits(total, true);
    let number = number_for(reduced);
    NumerologyResult {
        number,
        trace: vec![day, month, year, total, reduced],
        meaning: number.meaning(),
    }
}

/// Expression (destiny) number from a full name.
///
/// Every letter counts; anything else (spaces, punctuation, digits) is
/// dropped before the chart lookup.
pub fn expression(full_name: &str) -> Result<NumerologyResult, NumerologyError> {
    let values: Vec<u32> = full_name.chars().filter_map(letter_value).collect();
    if values.is_empty() {
        return Err(NumerologyError::NoLetters);
    }
    Ok(reading_from_values(values))
}

/// Soul Urge number from the vowels of a full name.
pub fn soul_urge(full_name: &str) -> Result<NumerologyResult, NumerologyError> {
    let values: Vec<u32> = full_name
        .chars()
        .filter(|&c| is_vowel(c))
        .filter_map(letter_value)
        .collect();
    if values.is_empty() {
        return Err(NumerologyError::NoVowels);
    }
    Ok(reading_from_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------
    // reduce_digits
    // -----------------------------------------------------------------

    #[test]
    fn single_digits_pass_through() {
        for n in 0..=9 {
            assert_eq!(reduce_digits(n, true), n);
            assert_eq!(reduce_digits(n, false), n);
        }
    }

    #[test]
    fn masters_survive_when_preserved() {
        assert_eq!(reduce_digits(11, true), 11);
        assert_eq!(reduce_digits(22, true), 22);
        assert_eq!(reduce_digits(33, true), 33);
    }

    #[test]
    fn masters_reduce_when_not_preserved() {
        assert_eq!(reduce_digits(11, false), 2);
        assert_eq!(reduce_digits(22, false), 4);
        assert_eq!(reduce_digits(33, false), 6);
    }

    #[test]
    fn intermediate_master_stops_reduction() {
        // 29 -> 2 + 9 = 11, which is kept.
        assert_eq!(reduce_digits(29, true), 11);
        // 38 -> 3 + 8 = 11 via a different start.
        assert_eq!(reduce_digits(38, true), 11);
        // Without preservation both collapse to 2.
        assert_eq!(reduce_digits(29, false), 2);
    }

    #[test]
    fn multi_step_reduction() {
        // 1990 -> 19 -> 10 -> 1
        assert_eq!(reduce_digits(1990, true), 1);
        // 999 -> 27 -> 9
        assert_eq!(reduce_digits(999, false), 9);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(reduce_digits(0, true), 0);
        assert_eq!(reduce_digits(0, false), 0);
    }

    #[test]
    fn reduction_domain_sweep() {
        for n in 1..=9_999_999u32 {
            let plain = reduce_digits(n, false);
            assert!((1..=9).contains(&plain), "{n} -> {plain}");
            let kept = reduce_digits(n, true);
            assert!(
                (1..=9).contains(&kept) || kept == 11 || kept == 22 || kept == 33,
                "{n} -> {kept}"
            );
        }
    }

    // -----------------------------------------------------------------
    // Life Path
    // -----------------------------------------------------------------

    fn date(year: i32, month: u32, day: u32) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    #[test]
    fn life_path_1990_07_15() {
        // 15 -> 6, 7 -> 7, 1990 -> 1; 6 + 7 + 1 = 14 -> 5
        let r = life_path(&date(1990, 7, 15));
        assert_eq!(r.number, NumerologyNumber::Five);
        assert_eq!(r.trace, [6, 7, 1, 14, 5]);
        assert_eq!(r.meaning, NumerologyNumber::Five.meaning());
    }

    #[test]
    fn life_path_master_components() {
        // 11 -> 11, 11 -> 11, 1984 -> 22; 11 + 11 + 22 = 44 -> 8
        let r = life_path(&date(1984, 11, 11));
        assert_eq!(r.number, NumerologyNumber::Eight);
        assert_eq!(r.trace, [11, 11, 22, 44, 8]);
    }

    #[test]
    fn life_path_master_final() {
        // 29 -> 11, 11 -> 11, 1992 -> 21 -> 3; 11 + 11 + 3 = 25 -> 7
        let r = life_path(&date(1992, 11, 29));
        assert_eq!(r.number, NumerologyNumber::Seven);
        assert_eq!(r.trace, [11, 11, 3, 25, 7]);
    }

    // -----------------------------------------------------------------
    // Expression
    // -----------------------------------------------------------------

    #[test]
    fn expression_john_smith() {
        // J O H N S M I T H -> 1 6 8 5 1 4 9 2 8, total 44 -> 8
        let r = expression("John Smith").unwrap();
        assert_eq!(r.number, NumerologyNumber::Eight);
        assert_eq!(r.trace, [1, 6, 8, 5, 1, 4, 9, 2, 8, 44, 8]);
    }

    #[test]
    fn expression_lands_on_master() {
        // R H Y T H M -> 9 8 7 2 8 4, total 38 -> 11 preserved
        let r = expression("Rhythm").unwrap();
        assert_eq!(r.number, NumerologyNumber::Eleven);
        assert!(r.number.is_master());
        assert_eq!(r.trace, [9, 8, 7, 2, 8, 4, 38, 11]);
    }

    #[test]
    fn expression_ignores_case_and_punctuation() {
        let plain = expression("John Smith").unwrap();
        let noisy = expression("  john SMITH!! ").unwrap();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn expression_rejects_letterless_input() {
        assert_eq!(expression(""), Err(NumerologyError::NoLetters));
        assert_eq!(expression("123 456"), Err(NumerologyError::NoLetters));
        assert_eq!(expression(" .-! "), Err(NumerologyError::NoLetters));
    }

    // -----------------------------------------------------------------
    // Soul Urge
    // -----------------------------------------------------------------

    #[test]
    fn soul_urge_john_smith() {
        // Vowels O, I -> 6, 9; total 15 -> 6
        let r = soul_urge("John Smith").unwrap();
        assert_eq!(r.number, NumerologyNumber::Six);
        assert_eq!(r.trace, [6, 9, 15, 6]);
    }

    #[test]
    fn soul_urge_rejects_vowelless_name() {
        // Y does not count as a vowel.
        assert_eq!(soul_urge("Rhythm"), Err(NumerologyError::NoVowels));
        assert_eq!(soul_urge("BCDFG"), Err(NumerologyError::NoVowels));
    }

    #[test]
    fn soul_urge_uses_subset_of_expression_letters() {
        let name = "Maria Gonzalez";
        let e = expression(name).unwrap();
        let s = soul_urge(name).unwrap();
        // The vowel trace (minus total and final) is a subsequence of
        // the full letter trace.
        let letters = &e.trace[..e.trace.len() - 2];
        let vowels = &s.trace[..s.trace.len() - 2];
        let mut it = letters.iter();
        for v in vowels {
            assert!(it.any(|l| l == v), "vowel value {v} missing");
        }
    }
}
