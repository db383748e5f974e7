//! Interpretive text tables: moon-sign traits, daily rashifol, and
//! transit messages.
//!
//! These are fixed editorial strings keyed by sign or by house distance.
//! The wording is part of the output contract and is not generated.

use crate::sign::Sign;

/// Emotional characteristics of a natal moon sign.
pub const fn moon_traits(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => {
            "Emotionally dynamic and impulsive. Quick to react with passion and courage. \
             Independent in feelings."
        }
        Sign::Taurus => {
            "Emotionally stable and sensual. Needs security and comfort. Patient and loyal \
             in relationships."
        }
        Sign::Gemini => {
            "Emotionally versatile and curious. Needs mental stimulation. Communicative \
             about feelings."
        }
        Sign::Cancer => {
            "Deeply emotional and nurturing. Highly intuitive and protective. Strong \
             connection to home and family."
        }
        Sign::Leo => {
            "Emotionally warm and generous. Needs appreciation and recognition. Dramatic \
             expression of feelings."
        }
        Sign::Virgo => {
            "Emotionally analytical and practical. Needs order and usefulness. Helpful and \
             service-oriented."
        }
        Sign::Libra => {
            "Emotionally balanced and harmonious. Needs partnership and beauty. Diplomatic \
             in relationships."
        }
        Sign::Scorpio => {
            "Intensely emotional and transformative. Needs depth and authenticity. \
             Passionate and private."
        }
        Sign::Sagittarius => {
            "Emotionally optimistic and freedom-loving. Needs adventure and meaning. \
             Philosophical about feelings."
        }
        Sign::Capricorn => {
            "Emotionally reserved and responsible. Needs achievement and structure. \
             Practical about relationships."
        }
        Sign::Aquarius => {
            "Emotionally detached and humanitarian. Needs independence and innovation. \
             Friendly but reserved."
        }
        Sign::Pisces => {
            "Emotionally sensitive and compassionate. Needs spiritual connection. \
             Empathetic and imaginative."
        }
    }
}

/// Daily rashifol (moon-sign horoscope) text, keyed by the natal sign.
pub const fn daily_rashifol(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => {
            "Your emotional energy is high today. Take initiative in matters of the heart. \
             Trust your instincts and act on your feelings boldly."
        }
        Sign::Taurus => {
            "Seek comfort and stability in your emotional life today. Focus on nurturing \
             yourself and those you love. Material security brings peace of mind."
        }
        Sign::Gemini => {
            "Your emotions are mentally active today. Communicate your feelings clearly. \
             Variety in emotional experiences brings joy."
        }
        Sign::Cancer => {
            "Deep emotional currents flow today. Trust your intuition about people and \
             situations. Home and family need your attention."
        }
        Sign::Leo => {
            "Your heart is generous and warm today. Express your love creatively. \
             Recognition from loved ones lifts your spirits."
        }
        Sign::Virgo => {
            "Emotional clarity through practical action today. Helping others brings \
             emotional satisfaction. Organize your feelings methodically."
        }
        Sign::Libra => {
            "Harmony in relationships is your emotional priority today. Balance giving and \
             receiving. Beauty and partnership bring contentment."
        }
        Sign::Scorpio => {
            "Intense feelings demand your attention today. Transform emotional challenges \
             into growth. Deep connections are favored."
        }
        Sign::Sagittarius => {
            "Your emotions seek freedom and expansion today. Explore new emotional \
             territories. Optimism attracts positive experiences."
        }
        Sign::Capricorn => {
            "Emotional maturity and responsibility guide you today. Set boundaries that \
             protect your peace. Achievement brings emotional security."
        }
        Sign::Aquarius => {
            "Emotional detachment serves you well today. Connect with friends and \
             community. Innovation in relationships is highlighted."
        }
        Sign::Pisces => {
            "Spiritual and emotional sensitivity is heightened today. Trust your dreams \
             and intuitions. Compassion opens doors to healing."
        }
    }
}

/// Transit message keyed by circular sign distance (0-11) from the natal
/// moon to the transiting moon.
pub const fn transit_message(distance: u8) -> &'static str {
    match distance % 12 {
        0 => "Emotional renewal and fresh starts",
        1 => "Focus on emotional security and comfort",
        2 => "Mental and emotional communication emphasized",
        3 => "Retreat and introspection needed",
        4 => "Creative emotional expression highlighted",
        5 => "Emotional health and adjustment",
        6 => "Relationship emotions intensified",
        7 => "Deep emotional transformation",
        8 => "Emotional expansion and optimism",
        9 => "Public emotional expression",
        10 => "Social and group emotional connections",
        _ => "Emotional healing and release",
    }
}

/// English ordinal suffix for a house number (1st, 2nd, 3rd, 4th, ...,
/// with the 11th-13th exceptions).
pub const fn ordinal_suffix(n: u32) -> &'static str {
    let j = n % 10;
    let k = n % 100;
    if j == 1 && k != 11 {
        "st"
    } else if j == 2 && k != 12 {
        "nd"
    } else if j == 3 && k != 13 {
        "rd"
    } else {
        "th"
    }
}
