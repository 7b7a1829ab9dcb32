//! Shuffle rounds and the newest-first history log that holds them.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::core::partition::{effective_group_size, partition, random_id, Group};
use crate::error::Result;

/// Immutable record of one partition call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuffleRound {
    id: Uuid,
    number: u64,
    timestamp: DateTime<Utc>,
    participant_count: usize,
    requested_group_size: usize,
    group_size: usize,
    groups: Vec<Group>,
}

impl ShuffleRound {
    /// Partitions the pool and captures the result with the given timestamp.
    ///
    /// `number` is the caller's running count of rounds, starting at 1.
    pub fn create<R: Rng + ?Sized>(
        number: u64,
        participant_count: usize,
        group_size: usize,
        timestamp: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Self> {
        let groups = partition(participant_count, group_size, rng)?;
        Ok(Self {
            id: random_id(rng),
            number,
            timestamp,
            participant_count,
            requested_group_size: group_size,
            group_size: effective_group_size(participant_count, group_size),
            groups,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    /// Group size the partition actually used, after clamping.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn requested_group_size(&self) -> usize {
        self.requested_group_size
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}

/// Caller-owned log of rounds, newest first.
#[derive(Debug, Clone, Default)]
pub struct RoundHistory {
    rounds: VecDeque<ShuffleRound>,
    limit: Option<usize>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` rounds, dropping the oldest.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            rounds: VecDeque::new(),
            limit,
        }
    }

    pub fn prepend(&mut self, round: ShuffleRound) {
        self.rounds.push_front(round);
        if let Some(limit) = self.limit {
            self.rounds.truncate(limit.max(1));
        }
    }

    /// Removes every round at once; returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.rounds.len();
        self.rounds.clear();
        dropped
    }

    pub fn latest(&self) -> Option<&ShuffleRound> {
        self.rounds.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShuffleRound> {
        self.rounds.iter()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{fixed_timestamp, seeded_rng};

    fn round(seed: u64) -> ShuffleRound {
        ShuffleRound::create(seed, 6, 2, fixed_timestamp(), &mut seeded_rng(seed)).unwrap()
    }

    #[test]
    fn test_round_records_inputs() {
        let r = ShuffleRound::create(9, 7, 3, fixed_timestamp(), &mut seeded_rng(1)).unwrap();
        assert_eq!(r.number(), 9);
        assert_eq!(r.participant_count(), 7);
        assert_eq!(r.group_size(), 3);
        assert_eq!(r.requested_group_size(), 3);
        assert_eq!(r.timestamp(), fixed_timestamp());
        assert_eq!(r.groups().len(), 2);
    }

    #[test]
    fn test_round_id_differs_from_group_ids() {
        let r = round(4);
        assert!(r.groups().iter().all(|g| g.id != r.id()));
    }

    #[test]
    fn test_round_rejects_invalid_input() {
        assert!(ShuffleRound::create(1, 0, 2, fixed_timestamp(), &mut seeded_rng(1)).is_err());
    }

    #[test]
    fn test_round_records_clamped_group_size() {
        let oversized = ShuffleRound::create(1, 3, 10, fixed_timestamp(), &mut seeded_rng(1)).unwrap();
        assert_eq!(oversized.group_size(), 3);
        assert_eq!(oversized.requested_group_size(), 10);
        assert_eq!(oversized.groups().len(), 1);

        let raised = ShuffleRound::create(1, 4, 1, fixed_timestamp(), &mut seeded_rng(1)).unwrap();
        assert_eq!(raised.group_size(), 2);
        assert_eq!(raised.requested_group_size(), 1);
        assert!(raised.groups().iter().all(|g| g.len() == raised.group_size()));
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut history = RoundHistory::new();
        let first = round(1);
        let second = round(2);
        history.prepend(first.clone());
        history.prepend(second.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(&second));
        let ids: Vec<Uuid> = history.iter().map(ShuffleRound::id).collect();
        assert_eq!(ids, vec![second.id(), first.id()]);
    }

    #[test]
    fn test_history_clear() {
        let mut history = RoundHistory::new();
        history.prepend(round(1));
        history.prepend(round(2));
        assert_eq!(history.clear(), 2);
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut history = RoundHistory::with_limit(Some(2));
        let oldest = round(1);
        history.prepend(oldest.clone());
        history.prepend(round(2));
        history.prepend(round(3));
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.id() != oldest.id()));
    }

    #[test]
    fn test_round_serializes() {
        let json = serde_json::to_value(round(5)).unwrap();
        assert_eq!(json["participant_count"], 6);
        assert_eq!(json["number"], 5);
        assert_eq!(json["group_size"], 2);
        assert_eq!(json["groups"].as_array().map(Vec::len), Some(3));
    }
}
