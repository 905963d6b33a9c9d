//! The simultaneous-action buffer.
//!
//! Generalizes the per-game "pending actions" bookkeeping that
//! simultaneous-move games otherwise reimplement: one slot per player,
//! released as a single batch once every active player has submitted.

use indexmap::IndexMap;

use parley_core::{PlayerId, StageError};

/// A complete round of submitted actions, keyed by player, in
/// submission order.
pub type ActionBatch = IndexMap<PlayerId, String>;

/// The buffer's position within the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// At least one player has yet to submit.
    Collecting,
    /// Every active player has a pending action; the batch is ready to
    /// be drained and resolved.
    Ready,
}

/// Accumulates one action per player until the round is complete.
///
/// A player may overwrite their own pending action while the round is
/// still collecting; the buffer never holds more than one action per
/// player per round. The batch is handed out exactly once per round by
/// [`drain_and_clear`](ActionBuffer::drain_and_clear), which resets the
/// buffer for the next round.
///
/// # Examples
///
/// ```
/// use parley_core::PlayerId;
/// use parley_engine::{ActionBuffer, RoundPhase};
///
/// let mut buffer = ActionBuffer::new(2);
/// assert_eq!(buffer.submit(PlayerId(0), "[up]").unwrap(), RoundPhase::Collecting);
/// assert_eq!(buffer.submit(PlayerId(1), "[bomb]").unwrap(), RoundPhase::Ready);
/// let batch = buffer.drain_and_clear();
/// assert_eq!(batch[&PlayerId(0)], "[up]");
/// assert!(buffer.drain_and_clear().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ActionBuffer {
    player_count: usize,
    pending: ActionBatch,
}

impl ActionBuffer {
    /// Create an empty buffer for `player_count` active players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            pending: ActionBatch::with_capacity(player_count),
        }
    }

    /// Stage one player's action for the current round.
    ///
    /// Overwrites any action the same player already staged. Returns
    /// the buffer's phase after the submission: [`RoundPhase::Ready`]
    /// exactly when this was the last missing action.
    ///
    /// # Errors
    ///
    /// [`StageError::UnknownPlayer`] if the submitter is outside the
    /// player set.
    pub fn submit(
        &mut self,
        player: PlayerId,
        action: impl Into<String>,
    ) -> Result<RoundPhase, StageError> {
        if player.index() >= self.player_count {
            return Err(StageError::UnknownPlayer {
                player,
                player_count: self.player_count,
            });
        }
        self.pending.insert(player, action.into());
        Ok(self.phase())
    }

    /// The buffer's current phase.
    pub fn phase(&self) -> RoundPhase {
        if self.pending.len() == self.player_count {
            RoundPhase::Ready
        } else {
            RoundPhase::Collecting
        }
    }

    /// Whether every active player has a pending action.
    pub fn is_ready(&self) -> bool {
        self.phase() == RoundPhase::Ready
    }

    /// Whether a specific player has already submitted this round.
    pub fn has_submitted(&self, player: PlayerId) -> bool {
        self.pending.contains_key(&player)
    }

    /// The number of actions staged so far this round.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Hand out the batch and reset for the next round.
    ///
    /// Intended to be called once [`is_ready`](ActionBuffer::is_ready)
    /// turns true; a second call without new submissions returns an
    /// empty batch.
    pub fn drain_and_clear(&mut self) -> ActionBatch {
        std::mem::take(&mut self.pending)
    }

    /// Discard any staged actions. Called only between episodes.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_only_after_every_player_submits() {
        let mut buffer = ActionBuffer::new(2);
        assert!(!buffer.is_ready());
        buffer.submit(PlayerId(0), "[left]").unwrap();
        assert!(!buffer.is_ready());
        buffer.submit(PlayerId(1), "[right]").unwrap();
        assert!(buffer.is_ready());
    }

    #[test]
    fn self_overwrite_keeps_one_slot_per_player() {
        let mut buffer = ActionBuffer::new(2);
        buffer.submit(PlayerId(0), "[left]").unwrap();
        buffer.submit(PlayerId(0), "[bomb]").unwrap();
        assert_eq!(buffer.pending_count(), 1);
        buffer.submit(PlayerId(1), "[stay]").unwrap();
        let batch = buffer.drain_and_clear();
        assert_eq!(batch[&PlayerId(0)], "[bomb]");
    }

    #[test]
    fn drain_twice_returns_empty_second_batch() {
        let mut buffer = ActionBuffer::new(1);
        buffer.submit(PlayerId(0), "[go]").unwrap();
        assert_eq!(buffer.drain_and_clear().len(), 1);
        assert!(buffer.drain_and_clear().is_empty());
        assert_eq!(buffer.phase(), RoundPhase::Collecting);
    }

    #[test]
    fn unknown_player_is_rejected() {
        let mut buffer = ActionBuffer::new(2);
        let err = buffer.submit(PlayerId(2), "[x]").unwrap_err();
        assert_eq!(
            err,
            StageError::UnknownPlayer {
                player: PlayerId(2),
                player_count: 2,
            }
        );
        assert_eq!(buffer.pending_count(), 0);
    }

    #[test]
    fn batch_preserves_submission_order() {
        let mut buffer = ActionBuffer::new(3);
        buffer.submit(PlayerId(2), "[c]").unwrap();
        buffer.submit(PlayerId(0), "[a]").unwrap();
        buffer.submit(PlayerId(1), "[b]").unwrap();
        let order: Vec<_> = buffer.drain_and_clear().into_keys().collect();
        assert_eq!(order, [PlayerId(2), PlayerId(0), PlayerId(1)]);
    }
}
