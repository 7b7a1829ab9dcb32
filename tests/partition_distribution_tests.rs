//! Statistical checks that partitioning is unbiased
//!
//! Trials use a fixed seed so the counts are reproducible; bounds sit well
//! outside the binomial spread for the trial counts used.

use groupwise::partition;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

const TRIALS: usize = 6000;

#[test]
fn test_every_ordering_equally_likely() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let groups = partition(3, 3, &mut rng).unwrap();
        assert_eq!(groups.len(), 1);
        *counts.entry(groups[0].members.clone()).or_default() += 1;
    }

    // 3! orderings, 1000 expected each, standard deviation about 29
    assert_eq!(counts.len(), 6);
    for (ordering, count) in &counts {
        assert!(
            (850..=1150).contains(count),
            "ordering {ordering:?} seen {count} times"
        );
    }
}

#[test]
fn test_partner_of_first_participant_is_uniform() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut partners: HashMap<usize, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let groups = partition(4, 2, &mut rng).unwrap();
        let group = groups
            .iter()
            .find(|g| g.members.contains(&1))
            .unwrap();
        let partner = group.members.iter().copied().find(|m| *m != 1).unwrap();
        *partners.entry(partner).or_default() += 1;
    }

    // Three possible partners, 2000 expected each, standard deviation about 37
    assert_eq!(partners.len(), 3);
    for (partner, count) in &partners {
        assert!(
            (1800..=2200).contains(count),
            "partner {partner} seen {count} times"
        );
    }
}

#[test]
fn test_no_ordering_dominates_large_pool() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut first_positions: HashMap<usize, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let groups = partition(10, 5, &mut rng).unwrap();
        *first_positions.entry(groups[0].members[0]).or_default() += 1;
    }

    // Ten candidates for the first slot, 600 expected each, standard deviation about 23
    assert_eq!(first_positions.len(), 10);
    for (member, count) in &first_positions {
        assert!(
            (480..=720).contains(count),
            "participant {member} led {count} times"
        );
    }
}
