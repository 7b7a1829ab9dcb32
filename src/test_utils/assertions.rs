//! Custom assertion helpers for partition results

use std::collections::HashSet;

use crate::core::partition::Group;

/// Asserts that `groups` covers `1..=participants` exactly once and has no stray singletons
pub fn assert_valid_partition(groups: &[Group], participants: usize) {
    let mut seen = HashSet::new();
    for group in groups {
        assert!(!group.is_empty(), "Found an empty group in {groups:?}");
        for member in &group.members {
            assert!(
                seen.insert(*member),
                "Participant {member} appears more than once in {groups:?}"
            );
        }
    }

    let expected: HashSet<usize> = (1..=participants).collect();
    assert_eq!(seen, expected, "Partition does not cover the pool exactly");

    if participants > 1 {
        assert!(
            groups.iter().all(|g| g.len() >= 2),
            "Found a singleton group in {groups:?}"
        );
    }
}

/// Asserts that `a` and `b` contain the same items regardless of order
pub fn assert_same_members(a: &[usize], b: &[usize]) {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b, "Member lists differ");
}
