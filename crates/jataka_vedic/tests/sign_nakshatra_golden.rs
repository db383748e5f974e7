//! Integration tests for sign and nakshatra lookup.
//!
//! Pure-math tests over the fixed segment table (no ephemeris needed).

use jataka_vedic::{
    ALL_NAKSHATRAS, ALL_SIGNS, Nakshatra, SEGMENTS, Sign, nakshatra_for, sign_from_longitude,
};

// ---------------------------------------------------------------------------
// Sign lookup
// ---------------------------------------------------------------------------

#[test]
fn sign_sweep_all_12() {
    let expected = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];
    for (i, s) in expected.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0; // midpoint of each sign
        let pos = sign_from_longitude(lon);
        assert_eq!(pos.sign, *s, "sign at {lon} deg");
        assert_eq!(pos.sign_index, i as u8);
        assert!((pos.degree_in_sign - 15.0).abs() < 1e-9);
    }
}

#[test]
fn sign_boundaries() {
    assert_eq!(sign_from_longitude(0.0).sign, Sign::Aries);
    assert_eq!(sign_from_longitude(29.999).sign, Sign::Aries);
    assert_eq!(sign_from_longitude(30.0).sign, Sign::Taurus);
    assert_eq!(sign_from_longitude(330.0).sign, Sign::Pisces);
    assert_eq!(sign_from_longitude(359.999).sign, Sign::Pisces);
}

#[test]
fn sign_longitude_wraps() {
    // Whole revolutions and negative input land in the same sign.
    assert_eq!(sign_from_longitude(360.0).sign, Sign::Aries);
    assert_eq!(sign_from_longitude(405.0).sign, Sign::Taurus);
    assert_eq!(sign_from_longitude(-30.0).sign, Sign::Pisces);
    let pos = sign_from_longitude(720.5);
    assert_eq!(pos.sign, Sign::Aries);
    assert!((pos.degree_in_sign - 0.5).abs() < 1e-9);
}

#[test]
fn sign_and_degree_reconstruct_longitude() {
    // sign_index * 30 + degree_in_sign recovers the input, and feeding
    // the reconstruction back returns the same placement.
    let mut lon = 0.0;
    while lon < 360.0 {
        let pos = sign_from_longitude(lon);
        let rebuilt = pos.sign_index as f64 * 30.0 + pos.degree_in_sign;
        assert!((rebuilt - lon).abs() < 1e-9, "at {lon}");
        let again = sign_from_longitude(rebuilt);
        assert_eq!(again.sign, pos.sign, "at {lon}");
        assert!((again.degree_in_sign - pos.degree_in_sign).abs() < 1e-9);
        lon += 0.53;
    }
}

// ---------------------------------------------------------------------------
// Nakshatra segment table
// ---------------------------------------------------------------------------

#[test]
fn segment_table_shape() {
    // 36 rows naming all 27 nakshatras; the 9 that straddle a sign
    // boundary appear twice.
    assert_eq!(SEGMENTS.len(), 36);
    for n in ALL_NAKSHATRAS {
        let rows = SEGMENTS.iter().filter(|s| s.nakshatra == n).count();
        assert!(
            rows == 1 || rows == 2,
            "{} appears in {rows} segments",
            n.name()
        );
    }
    let straddlers = ALL_NAKSHATRAS
        .iter()
        .filter(|n| SEGMENTS.iter().filter(|s| s.nakshatra == **n).count() == 2)
        .count();
    assert_eq!(straddlers, 9);
}

#[test]
fn segment_table_partitions_every_sign() {
    for sign in ALL_SIGNS {
        let rows: Vec<_> = SEGMENTS.iter().filter(|s| s.sign == sign).collect();
        assert_eq!(rows.len(), 3, "{}", sign.name());
        assert_eq!(rows[0].start_deg, 0.0);
        assert_eq!(rows[2].end_deg, 30.0);
        assert_eq!(rows[0].end_deg, rows[1].start_deg);
        assert_eq!(rows[1].end_deg, rows[2].start_deg);
    }
}

#[test]
fn krittika_straddles_aries_and_taurus() {
    assert_eq!(nakshatra_for(Sign::Aries, 27.0).nakshatra, Nakshatra::Krittika);
    assert_eq!(nakshatra_for(Sign::Taurus, 5.0).nakshatra, Nakshatra::Krittika);
    // Past the straddle, Taurus moves on to Rohini.
    assert_eq!(nakshatra_for(Sign::Taurus, 10.0).nakshatra, Nakshatra::Rohini);
}

#[test]
fn pada_sequence_across_aries() {
    // Ashwini fills [0, 13.33); its four padas are ~3.33 deg each.
    assert_eq!(nakshatra_for(Sign::Aries, 1.0).pada, 1);
    assert_eq!(nakshatra_for(Sign::Aries, 4.0).pada, 2);
    assert_eq!(nakshatra_for(Sign::Aries, 7.5).pada, 3);
    assert_eq!(nakshatra_for(Sign::Aries, 12.0).pada, 4);
    // Bharani restarts the pada count at its own start.
    assert_eq!(nakshatra_for(Sign::Aries, 14.0).pada, 1);
}

#[test]
fn pada_in_range_everywhere() {
    for sign in ALL_SIGNS {
        let mut d = 0.0;
        while d < 30.0 {
            let p = nakshatra_for(sign, d);
            assert!(
                (1..=4).contains(&p.pada),
                "{} {d} deg gave pada {}",
                sign.name(),
                p.pada
            );
            d += 0.25;
        }
    }
}

// ---------------------------------------------------------------------------
// Spot-check: Moon at J2000
// ---------------------------------------------------------------------------

#[test]
fn spot_check_moon_j2000() {
    // Moon at J2000: sidereal ~198.27 deg.
    // 198.27 / 30 = 6.6 → Libra (index 6), degree_in_sign ~18.27.
    let sidereal = 198.27;
    let pos = sign_from_longitude(sidereal);
    assert_eq!(pos.sign, Sign::Libra);
    assert_eq!(pos.sign_index, 6);
    assert!((pos.degree_in_sign - 18.27).abs() < 1e-9);

    // Libra: Chitra [0, 6.67), Swati [6.67, 20), Vishakha [20, 30).
    // 18.27 falls late in Swati: (18.27 - 6.67) / 13.33 = 0.87 → pada 4.
    let placement = nakshatra_for(pos.sign, pos.degree_in_sign);
    assert_eq!(placement.nakshatra, Nakshatra::Swati);
    assert_eq!(placement.pada, 4);
}
