//! Property-based tests for the group partitioner
//!
//! These verify coverage, the no-singleton rule and the clamping behaviour for
//! arbitrary participant counts, group sizes and seeds.

#[cfg(test)]
mod tests {
    use crate::core::partition::*;
    use crate::test_utils::fixtures::seeded_rng;
    use proptest::prelude::*;
    use std::collections::HashSet;

    // Strategy for generating chunk lists with a trailing remainder of any size
    prop_compose! {
        fn chunk_list()(
            full in 0usize..8,
            size in 1usize..6,
            remainder in 0usize..6,
        ) -> Vec<Vec<usize>> {
            let remainder = remainder % size;
            let total = full * size + remainder;
            chunk_pool(&build_pool(total), size)
        }
    }

    proptest! {
        #[test]
        fn test_partition_covers_pool_exactly_once(
            participants in 1usize..200,
            group_size in 1usize..50,
            seed in any::<u64>(),
        ) {
            let groups = partition(participants, group_size, &mut seeded_rng(seed)).unwrap();

            let mut seen = HashSet::new();
            for group in &groups {
                prop_assert!(!group.is_empty());
                for member in &group.members {
                    prop_assert!(seen.insert(*member), "member {} appears twice", member);
                }
            }
            let expected: HashSet<usize> = (1..=participants).collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn test_partition_never_returns_singletons(
            participants in 2usize..200,
            group_size in 1usize..50,
            seed in any::<u64>(),
        ) {
            let groups = partition(participants, group_size, &mut seeded_rng(seed)).unwrap();
            for group in &groups {
                prop_assert!(group.len() >= 2, "singleton group in {:?}", groups);
            }
        }

        #[test]
        fn test_group_sizes_bounded(
            participants in 1usize..200,
            group_size in 1usize..50,
            seed in any::<u64>(),
        ) {
            let size = effective_group_size(participants, group_size);
            let groups = partition(participants, group_size, &mut seeded_rng(seed)).unwrap();

            // All but the last group are exactly `size`; the last may absorb one extra.
            let (last, rest) = groups.split_last().unwrap();
            for group in rest {
                prop_assert_eq!(group.len(), size);
            }
            prop_assert!(last.len() <= size + 1);
        }

        #[test]
        fn test_oversized_group_yields_single_group(
            participants in 1usize..50,
            extra in 0usize..50,
            seed in any::<u64>(),
        ) {
            let groups = partition(participants, participants + extra, &mut seeded_rng(seed)).unwrap();
            prop_assert_eq!(groups.len(), 1);
            prop_assert_eq!(groups[0].len(), participants);
        }

        #[test]
        fn test_merge_is_one_shot(chunks in chunk_list()) {
            let mut merged = chunks.clone();
            let did_merge = merge_trailing_singleton(&mut merged);

            let trailing_singleton = chunks.len() > 1 && chunks.last().map(Vec::len) == Some(1);
            prop_assert_eq!(did_merge, trailing_singleton);
            if did_merge {
                prop_assert_eq!(merged.len(), chunks.len() - 1);
                prop_assert!(merged.last().map(Vec::len).unwrap_or(0) >= 2);
            } else {
                prop_assert_eq!(&merged, &chunks);
            }

            let flat_before: Vec<usize> = chunks.concat();
            let flat_after: Vec<usize> = merged.concat();
            prop_assert_eq!(flat_before, flat_after);
        }
    }
}
