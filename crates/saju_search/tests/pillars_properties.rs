//! Property tests over the calculator and the codec.

use std::sync::LazyLock;

use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;
use saju_base::Pillar;
use saju_search::{
    AstronomicalTerms, BirthInput, CachedTerms, FourPillars, FourPillarsCalculator,
    LocaleProfile, canonical_key, day_pillar, equals, parse_canonical_key,
};
use saju_time::CivilDateTime;

static TERMS: LazyLock<CachedTerms> = LazyLock::new(|| CachedTerms::new(AstronomicalTerms::default()));

fn calc() -> FourPillarsCalculator<&'static CachedTerms> {
    FourPillarsCalculator::new(&*TERMS)
}

fn parity_ok(p: Pillar) -> bool {
    p.stem().index() % 2 == p.branch().index() % 2
}

fn arb_civil() -> impl Strategy<Value = CivilDateTime> {
    (1950i32..2050, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60)
        .prop_map(|(y, mo, d, h, mi)| CivilDateTime::new(y, mo, d, h, mi, 0).unwrap())
}

fn arb_profile() -> impl Strategy<Value = LocaleProfile> {
    prop_oneof![Just(LocaleProfile::KOREAN), Just(LocaleProfile::OTHER)]
}

fn arb_pillars() -> impl Strategy<Value = FourPillars> {
    (0u8..60, 0u8..60, 0u8..60, proptest::option::of(0u8..60)).prop_map(|(y, m, d, h)| {
        let p = |i: u8| Pillar::from_index(i).unwrap();
        FourPillars::new(p(y), p(m), p(d), h.map(p))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_pillar_keeps_parity(civil in arb_civil(), tz in -720i32..=840, profile in arb_profile()) {
        let input = BirthInput::new(civil, tz, false, profile).unwrap();
        let fp = calc().compute(&input).unwrap();
        for p in fp.pillars().into_iter().flatten() {
            prop_assert!(parity_ok(p));
        }
        prop_assert!(fp.hour.is_some());
    }

    #[test]
    fn compute_is_deterministic(civil in arb_civil(), profile in arb_profile()) {
        let input = BirthInput::new(civil, profile.default_utc_offset_minutes, false, profile).unwrap();
        let cached = calc().compute(&input).unwrap();
        let again = calc().compute(&input).unwrap();
        let uncached = FourPillarsCalculator::new(AstronomicalTerms::default()).compute(&input).unwrap();
        prop_assert_eq!(cached, again);
        prop_assert_eq!(cached, uncached);
    }

    #[test]
    fn unknown_time_never_depends_on_clock(
        civil in arb_civil(),
        h in 0u32..24,
        mi in 0u32..60,
        profile in arb_profile(),
    ) {
        let other_clock = CivilDateTime::new(civil.year(), civil.month(), civil.day(), h, mi, 0).unwrap();
        let tz = profile.default_utc_offset_minutes;
        let a = calc().compute(&BirthInput::new(civil, tz, true, profile).unwrap()).unwrap();
        let b = calc().compute(&BirthInput::new(other_clock, tz, true, profile).unwrap()).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!(a.hour.is_none());
    }

    #[test]
    fn day_pillar_period_sixty(days in -60_000i64..60_000) {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let d = base + TimeDelta::days(days);
        prop_assert_eq!(day_pillar(d), day_pillar(d + TimeDelta::days(60)));
        prop_assert_eq!(day_pillar(d).advance(1), day_pillar(d + TimeDelta::days(1)));
    }

    #[test]
    fn equality_is_an_equivalence(a in arb_pillars(), b in arb_pillars(), c in arb_pillars()) {
        prop_assert!(equals(&a, &a));
        prop_assert_eq!(equals(&a, &b), equals(&b, &a));
        if equals(&a, &b) && equals(&b, &c) {
            prop_assert!(equals(&a, &c));
        }
    }

    #[test]
    fn keys_agree_with_equality(a in arb_pillars(), b in arb_pillars()) {
        prop_assert_eq!(equals(&a, &b), canonical_key(&a) == canonical_key(&b));
        prop_assert_eq!(parse_canonical_key(&canonical_key(&a)).unwrap(), a);
    }
}
