use proptest::prelude::*;
use saju_base::{
    ALL_BRANCHES, ALL_STEMS, CYCLE_LENGTH, Pillar, advance, branch_at, cycle_index_of, stem_at,
};

#[test]
fn exactly_sixty_valid_pairs() {
    let mut seen = [false; 60];
    let mut valid = 0;
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            if let Ok(i) = cycle_index_of(s, b) {
                assert!(!seen[i as usize], "index {i} produced twice");
                seen[i as usize] = true;
                valid += 1;
            }
        }
    }
    assert_eq!(valid, 60);
    assert!(seen.iter().all(|&x| x));
}

proptest! {
    #[test]
    fn stem_and_branch_of_position_share_parity(i in -100_000i64..100_000) {
        prop_assert_eq!(stem_at(i).index() % 2, branch_at(i).index() % 2);
    }

    #[test]
    fn position_resolves_to_its_index(i in -100_000i64..100_000) {
        let idx = cycle_index_of(stem_at(i), branch_at(i)).unwrap();
        prop_assert_eq!(idx as i64, i.rem_euclid(60));
    }

    #[test]
    fn advance_stays_in_range(i in 0u8..CYCLE_LENGTH, delta in any::<i32>()) {
        let r = advance(i, delta as i64);
        prop_assert!(r < CYCLE_LENGTH);
        prop_assert_eq!(advance(r, -(delta as i64)), i);
    }

    #[test]
    fn pillar_advance_matches_free_function(i in 0u8..CYCLE_LENGTH, delta in -1000i64..1000) {
        let p = Pillar::from_index(i).unwrap();
        prop_assert_eq!(p.advance(delta).index(), advance(i, delta));
        prop_assert_eq!(p.advance(60 * 7).index(), i);
    }

    #[test]
    fn text_roundtrip(i in 0u8..CYCLE_LENGTH) {
        let p = Pillar::from_index(i).unwrap();
        let hanja: Vec<char> = p.hanja().chars().collect();
        let hangul: Vec<char> = p.hangul().chars().collect();
        prop_assert_eq!(Pillar::from_chars(hanja[0], hanja[1]).unwrap(), p);
        prop_assert_eq!(Pillar::from_chars(hangul[0], hangul[1]).unwrap(), p);
    }
}
