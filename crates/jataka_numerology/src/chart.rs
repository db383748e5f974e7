//! The Pythagorean letter chart.
//!
//! The 26 letters map onto 1-9 in three repeating rows:
//! A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8.

/// Chart value of a letter, or `None` for any non-letter character.
///
/// Case-insensitive; non-ASCII characters are treated as non-letters.
pub const fn letter_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        'A' | 'J' | 'S' => Some(1),
        'B' | 'K' | 'T' => Some(2),
        'C' | 'L' | 'U' => Some(3),
        'D' | 'M' | 'V' => Some(4),
        'E' | 'N' | 'W' => Some(5),
        'F' | 'O' | 'X' => Some(6),
        'G' | 'P' | 'Y' => Some(7),
        'H' | 'Q' | 'Z' => Some(8),
        'I' | 'R' => Some(9),
        _ => None,
    }
}

/// Whether `c` is one of the vowels A, E, I, O, U (either case).
///
/// Y never counts as a vowel in this chart.
pub const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}
