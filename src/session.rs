//! Stateful sessions driven by a presentation layer.
//!
//! [`ShuffleSession`] owns the participant/group-size inputs and the round history.
//! [`RotationSession`] owns the mode, roster and current skills, and allows at most
//! one rotation in flight. Both take `&mut self` for every write, so a multi-threaded
//! host has to wrap them in a lock to keep the read-then-write sequence atomic.

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::core::partition::{DEFAULT_GROUP_SIZE, DEFAULT_PARTICIPANTS, MAX_PARTICIPANTS};
use crate::core::skills::{rotate, Assignment, Mode, RosterSource, SkillLevel, TeamMember};
use crate::error::{GroupwiseError, Result};
use crate::logging;
use crate::round::{RoundHistory, ShuffleRound};

#[derive(Debug, Clone)]
pub struct ShuffleSession {
    participants: usize,
    group_size: usize,
    history: RoundHistory,
    rounds_created: u64,
}

impl Default for ShuffleSession {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICIPANTS, DEFAULT_GROUP_SIZE, None)
    }
}

impl ShuffleSession {
    pub fn new(participants: usize, group_size: usize, history_limit: Option<usize>) -> Self {
        let mut session = Self {
            participants: 1,
            group_size: 1,
            history: RoundHistory::with_limit(history_limit),
            rounds_created: 0,
        };
        session.set_participants(participants);
        session.set_group_size(group_size);
        session
    }

    pub fn participants(&self) -> usize {
        self.participants
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Inclusive bounds the group size is held to: `[1, max(1, participants)]`.
    pub fn group_size_bounds(&self) -> (usize, usize) {
        (1, self.participants.max(1))
    }

    /// Sets the participant count, clamped to `[1, MAX_PARTICIPANTS]`, and re-clamps
    /// the group size.
    pub fn set_participants(&mut self, participants: usize) {
        self.participants = participants.clamp(1, MAX_PARTICIPANTS);
        self.set_group_size(self.group_size);
    }

    pub fn set_group_size(&mut self, group_size: usize) {
        let (min, max) = self.group_size_bounds();
        self.group_size = group_size.clamp(min, max);
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Rounds created over the session's lifetime. Not reset by clearing or capping
    /// the history.
    pub fn rounds_created(&self) -> u64 {
        self.rounds_created
    }

    /// Runs a partition with the current inputs and prepends the round to history.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&ShuffleRound> {
        self.shuffle_at(Utc::now(), rng)
    }

    pub fn shuffle_at<R: Rng + ?Sized>(
        &mut self,
        timestamp: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<&ShuffleRound> {
        let round = ShuffleRound::create(
            self.rounds_created + 1,
            self.participants,
            self.group_size,
            timestamp,
            rng,
        )?;
        self.rounds_created = round.number();
        logging::log_shuffle_round(&round);
        self.history.prepend(round);
        self.history
            .latest()
            .ok_or_else(|| anyhow::anyhow!("History is empty after prepending a round").into())
    }

    /// Drops every recorded round.
    pub fn clear_history(&mut self) -> usize {
        let dropped = self.history.clear();
        logging::log_history_cleared(dropped);
        dropped
    }
}

/// Proof that a rotation was started; redeem it with [`RotationSession::commit`] on
/// the session that issued it.
#[derive(Debug)]
#[must_use = "a pending rotation keeps the session busy until committed"]
pub struct PendingRotation {
    session: Uuid,
    generation: u64,
}

/// Not `Clone`: each session has its own identity and pending tickets.
#[derive(Debug)]
pub struct RotationSession {
    id: Uuid,
    source: RosterSource,
    assignment: Assignment,
    generation: u64,
    busy: bool,
    rotations: usize,
}

impl Default for RotationSession {
    fn default() -> Self {
        Self::new(RosterSource::default(), Mode::Split)
    }
}

impl RotationSession {
    pub fn new(source: RosterSource, mode: Mode) -> Self {
        let assignment = Assignment::derive(&source, mode);
        Self {
            id: Uuid::new_v4(),
            source,
            assignment,
            generation: 0,
            busy: false,
            rotations: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.assignment.mode
    }

    pub fn roster(&self) -> &[TeamMember] {
        &self.assignment.roster
    }

    pub fn vocabulary(&self) -> &[SkillLevel] {
        &self.assignment.vocabulary
    }

    pub fn skills(&self) -> &[SkillLevel] {
        &self.assignment.skills
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Rotations applied since the last mode derivation.
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Switches mode and re-derives roster, vocabulary and skills from scratch.
    ///
    /// Any rotation started before the switch is discarded when committed.
    pub fn set_mode(&mut self, mode: Mode) {
        let previous = self.assignment.mode;
        self.assignment = Assignment::derive(&self.source, mode);
        self.generation += 1;
        self.rotations = 0;
        logging::log_mode_change(previous, mode);
    }

    pub fn toggle_mode(&mut self) -> Mode {
        let next = self.mode().toggle();
        self.set_mode(next);
        next
    }

    /// Marks the session busy. Fails if a rotation is already pending.
    pub fn begin_rotation(&mut self) -> Result<PendingRotation> {
        if self.busy {
            tracing::debug!("Rejected overlapping rotation request");
            return Err(GroupwiseError::RotationInProgress);
        }
        self.busy = true;
        Ok(PendingRotation {
            session: self.id,
            generation: self.generation,
        })
    }

    /// Applies the pending rotation and clears the busy flag.
    ///
    /// Returns `false` when the mode changed after the rotation began; the skills
    /// are then left as freshly derived. A ticket issued by another session is
    /// rejected and this session stays busy.
    pub fn commit(&mut self, pending: PendingRotation) -> Result<bool> {
        if !self.busy {
            return Err(GroupwiseError::NoRotationPending);
        }
        if pending.session != self.id {
            tracing::debug!(
                issued_by = %pending.session,
                session = %self.id,
                "Rejected rotation ticket from another session"
            );
            return Err(GroupwiseError::ForeignRotation);
        }
        self.busy = false;

        if pending.generation != self.generation {
            tracing::debug!(
                issued = pending.generation,
                current = self.generation,
                "Discarded rotation started before a mode change"
            );
            return Ok(false);
        }

        self.assignment.skills = rotate(&self.assignment.skills);
        self.rotations += 1;
        logging::log_rotation(self.mode(), &self.assignment.skills);
        Ok(true)
    }

    /// Begins and commits a rotation in one step.
    pub fn rotate_now(&mut self) -> Result<&[SkillLevel]> {
        let pending = self.begin_rotation()?;
        self.commit(pending)?;
        Ok(self.skills())
    }
}
