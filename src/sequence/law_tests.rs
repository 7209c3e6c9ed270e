//==================================================================================
// Property Tests: combinator laws
//==================================================================================

use proptest::prelude::*;

use super::Sequence;
use crate::types::{Action, Predicate};

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000i32..1_000, 0..64)
}

proptest! {
    #[test]
    fn chunk_then_unchunk_is_identity(data in values(), n in 1usize..16) {
        let s = Sequence::new(data);
        let chunks = s.chunk_into(n).unwrap();
        prop_assert_eq!(chunks.len(), n);

        let back: Sequence<i32> = chunks.unchunk();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn chunk_sizes_are_balanced_and_descending(data in values(), n in 1usize..16) {
        let sizes = Sequence::new(data).chunk_into(n).unwrap().map(|c| c.len()).collect();
        for pair in sizes.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
            prop_assert!(pair[0] - pair[1] <= 1);
        }
    }

    #[test]
    fn window_cardinality(data in values(), n in 1usize..10) {
        let s = Sequence::new(data);
        let windows = s.window(n).unwrap();

        prop_assert_eq!(windows.len(), s.len().saturating_sub(n - 1));
        prop_assert_eq!(windows.len(), crate::kernels::window_count(s.len(), n));
        for (start, w) in windows.iter().enumerate() {
            prop_assert_eq!(w.as_slice(), &s.as_slice()[start..start + n]);
        }
    }

    #[test]
    fn map_and_filter_match_plain_iterators(data in values()) {
        let s = Sequence::new(data.clone());

        let mapped: Vec<i64> = data.iter().map(|&x| i64::from(x) * 3 - 1).collect();
        prop_assert_eq!(s.map(|&x| i64::from(x) * 3 - 1).collect(), mapped);

        let kept: Vec<i32> = data.iter().copied().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(s.filter(|x| x % 3 == 0).collect(), kept);
    }

    #[test]
    fn map_when_selects_per_position(pairs in prop::collection::vec((any::<i16>(), any::<bool>()), 0..64)) {
        let (data, mask): (Vec<i16>, Vec<bool>) = pairs.into_iter().unzip();
        let s = Sequence::new(data.clone());

        let result = s
            .map_when(
                &Action::transform(|x: &i16| x.wrapping_neg()),
                &Predicate::mask(mask.clone()),
            )
            .unwrap();

        for i in 0..data.len() {
            let expected = if mask[i] { data[i].wrapping_neg() } else { data[i] };
            prop_assert_eq!(result[i], expected);
        }
    }
}
