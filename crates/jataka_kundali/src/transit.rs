//! Moon transit summary against a natal sign.

use jataka_moon::sidereal_longitude;
use jataka_time::CivilDateTime;
use jataka_vedic::{Sign, ordinal_suffix, sign_from_longitude, transit_message};

/// Circular sign distance (0-11) from the natal moon to the transiting
/// moon. Distance 0 means the same sign; 1 means the next sign, even
/// across the Pisces/Aries wrap.
pub const fn transit_distance(natal: Sign, current: Sign) -> u8 {
    (current.index() + 12 - natal.index()) % 12
}

/// One-paragraph transit summary comparing the natal sign with the moon
/// sign computed for `now`.
///
/// The instant is always supplied by the caller; this function never
/// reads a clock.
pub fn summarize_transit(natal: Sign, now: &CivilDateTime) -> String {
    let current = sign_from_longitude(sidereal_longitude(now)).sign;
    if current == natal {
        return format!(
            "The Moon is currently transiting through your natal Moon sign {}. This is \
             an emotionally significant period bringing heightened sensitivity and \
             intuition. Your feelings are strong and authentic now.",
            natal.name()
        );
    }

    let distance = transit_distance(natal, current);
    let house = distance as u32 + 1;
    format!(
        "The Moon is transiting through {}, which is your {}{} house from your natal \
         Moon. {}. This 2.5 day transit affects your emotional state and intuitive \
         responses.",
        current.name(),
        house,
        ordinal_suffix(house),
        transit_message(distance)
    )
}
