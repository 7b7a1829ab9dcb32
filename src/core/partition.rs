//! Randomized partitioning of a participant pool into groups
//!
//! The pool `1..=N` is permuted with an unbiased Fisher-Yates shuffle, cut into
//! consecutive chunks, and then passed through a one-shot correction that folds a
//! trailing single-member chunk into the chunk before it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GroupwiseError, Result};

/// Participant count a fresh session starts with.
pub const DEFAULT_PARTICIPANTS: usize = 4;

/// Group size a fresh session starts with.
pub const DEFAULT_GROUP_SIZE: usize = 2;

/// Largest pool a partition will build.
pub const MAX_PARTICIPANTS: usize = 100_000;

/// One group of participants produced by a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub members: Vec<usize>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Draws a v4 UUID from the supplied generator so ids follow the seed.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Builds the ordered pool `[1, 2, ..., participant_count]`.
pub fn build_pool(participant_count: usize) -> Vec<usize> {
    (1..=participant_count).collect()
}

/// In-place Fisher-Yates shuffle.
///
/// Walks from the last index down to 1 and swaps each element with a uniformly chosen
/// element at an index `<= i`, so every permutation is equally likely.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Clamps the requested group size into `[min(2, participant_count), participant_count]`.
///
/// A size of 1 with more than one participant would leave singletons that a single
/// trailing merge cannot remove, so it is raised to 2.
pub fn effective_group_size(participant_count: usize, group_size: usize) -> usize {
    group_size
        .min(participant_count)
        .max(participant_count.min(2))
}

/// Cuts the pool into consecutive chunks of `size`; the final chunk may be shorter.
pub fn chunk_pool(pool: &[usize], size: usize) -> Vec<Vec<usize>> {
    if size == 0 {
        return Vec::new();
    }
    pool.chunks(size).map(<[usize]>::to_vec).collect()
}

/// Folds a trailing single-member chunk into the chunk before it.
///
/// Applies only when there is more than one chunk and the last has exactly one
/// member. Runs at most once; returns whether a merge happened.
pub fn merge_trailing_singleton(chunks: &mut Vec<Vec<usize>>) -> bool {
    if chunks.len() < 2 || chunks.last().map(Vec::len) != Some(1) {
        return false;
    }

    let Some(singleton) = chunks.pop() else {
        return false;
    };
    if let Some(previous) = chunks.last_mut() {
        previous.extend(singleton);
    }
    true
}

/// Validates inputs and returns the permuted, chunked and corrected member lists.
pub fn partition_members<R: Rng + ?Sized>(
    participant_count: usize,
    group_size: usize,
    rng: &mut R,
) -> Result<Vec<Vec<usize>>> {
    if participant_count == 0 || participant_count > MAX_PARTICIPANTS {
        return Err(GroupwiseError::invalid_participant_count(participant_count));
    }
    if group_size == 0 {
        return Err(GroupwiseError::invalid_group_size(group_size));
    }

    let size = effective_group_size(participant_count, group_size);
    if size != group_size {
        tracing::debug!(
            requested = group_size,
            effective = size,
            "Group size clamped"
        );
    }

    let mut pool = build_pool(participant_count);
    fisher_yates(&mut pool, rng);

    let mut chunks = chunk_pool(&pool, size);
    if merge_trailing_singleton(&mut chunks) {
        tracing::debug!(groups = chunks.len(), "Merged trailing singleton group");
    }

    Ok(chunks)
}

/// Partitions participants `1..=participant_count` into randomized groups.
///
/// Every participant appears in exactly one group and no group has a single member
/// unless `participant_count == 1`.
pub fn partition<R: Rng + ?Sized>(
    participant_count: usize,
    group_size: usize,
    rng: &mut R,
) -> Result<Vec<Group>> {
    let chunks = partition_members(participant_count, group_size, rng)?;
    Ok(chunks
        .into_iter()
        .map(|members| Group {
            id: random_id(rng),
            members,
        })
        .collect())
}
