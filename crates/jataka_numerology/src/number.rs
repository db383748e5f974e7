//! The reduced number domain and its interpretive texts.

/// A fully reduced numerology number.
///
/// Reduction always lands on a single digit 1-9 or one of the master
/// numbers 11, 22, 33; no other value exists in the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumerologyNumber {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Eleven,
    TwentyTwo,
    ThirtyThree,
}

/// All twelve numbers in ascending value order.
pub const ALL_NUMBERS: [NumerologyNumber; 12] = [
    NumerologyNumber::One,
    NumerologyNumber::Two,
    NumerologyNumber::Three,
    NumerologyNumber::Four,
    NumerologyNumber::Five,
    NumerologyNumber::Six,
    NumerologyNumber::Seven,
    NumerologyNumber::Eight,
    NumerologyNumber::Nine,
    NumerologyNumber::Eleven,
    NumerologyNumber::TwentyTwo,
    NumerologyNumber::ThirtyThree,
];

impl NumerologyNumber {
    /// Numeric value (1-9, 11, 22, or 33).
    pub const fn value(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Eleven => 11,
            Self::TwentyTwo => 22,
            Self::ThirtyThree => 33,
        }
    }

    /// Whether this is one of the master numbers 11, 22, 33.
    pub const fn is_master(self) -> bool {
        matches!(self, Self::Eleven | Self::TwentyTwo | Self::ThirtyThree)
    }

    /// Number for a reduced value, or `None` outside the domain.
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            11 => Some(Self::Eleven),
            22 => Some(Self::TwentyTwo),
            33 => Some(Self::ThirtyThree),
            _ => None,
        }
    }

    /// Interpretive text for this number.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::One => {
                "Leadership, independence, and pioneering spirit. You are a natural leader \
                 with innovative ideas and strong willpower."
            }
            Self::Two => {
                "Cooperation, diplomacy, and sensitivity. You excel at bringing people \
                 together and creating harmony in relationships."
            }
            Self::Three => {
                "Creativity, self-expression, and joy. You have a gift for communication \
                 and inspire others with your optimistic outlook."
            }
            Self::Four => {
                "Stability, practicality, and hard work. You build strong foundations and \
                 are reliable, organized, and disciplined."
            }
            Self::Five => {
                "Freedom, adventure, and versatility. You thrive on change and variety, \
                 with a curious and adaptable nature."
            }
            Self::Six => {
                "Responsibility, nurturing, and service. You are caring and protective, \
                 with a strong sense of duty to family and community."
            }
            Self::Seven => {
                "Spirituality, analysis, and wisdom. You seek deeper truths and \
                 understanding through introspection and study."
            }
            Self::Eight => {
                "Ambition, success, and material mastery. You have strong business acumen \
                 and the ability to manifest abundance."
            }
            Self::Nine => {
                "Compassion, humanitarianism, and completion. You are idealistic and work \
                 toward the greater good of all."
            }
            Self::Eleven => {
                "Intuition, inspiration, and spiritual insight. Master number representing \
                 enlightenment and visionary thinking."
            }
            Self::TwentyTwo => {
                "Master builder, practical idealism, and manifesting dreams. You have the \
                 power to turn grand visions into reality."
            }
            Self::ThirtyThree => {
                "Master teacher, compassion, and selfless service. You embody unconditional \
                 love and spiritual guidance for others."
            }
        }
    }

    /// All twelve numbers.
    pub const fn all() -> &'static [NumerologyNumber; 12] {
        &ALL_NUMBERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_ascend() {
        let values: Vec<u32> = ALL_NUMBERS.iter().map(|n| n.value()).collect();
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33]);
    }

    #[test]
    fn exactly_three_masters() {
        let masters: Vec<_> = ALL_NUMBERS.iter().filter(|n| n.is_master()).collect();
        assert_eq!(masters.len(), 3);
        assert!(NumerologyNumber::Eleven.is_master());
        assert!(!NumerologyNumber::Nine.is_master());
    }

    #[test]
    fn from_value_round_trips() {
        for n in ALL_NUMBERS {
            assert_eq!(NumerologyNumber::from_value(n.value()), Some(n));
        }
    }

    #[test]
    fn from_value_rejects_outside_domain() {
        for v in [0, 10, 12, 21, 23, 32, 34, 44, 100] {
            assert_eq!(NumerologyNumber::from_value(v), None, "{v}");
        }
    }

    #[test]
    fn meanings_are_distinct() {
        for (i, a) in ALL_NUMBERS.iter().enumerate() {
            for b in &ALL_NUMBERS[i + 1..] {
                assert_ne!(a.meaning(), b.meaning());
            }
        }
    }
}
