//! Outcome, reward, and step-result types.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::id::PlayerId;
use crate::message::Observation;

/// Per-player rewards, indexed by player ID.
///
/// Uses `SmallVec<[f32; 4]>` to avoid heap allocation for the common
/// one- and two-player episodes. Larger player counts spill to the heap
/// transparently.
pub type RewardVec = SmallVec<[f32; 4]>;

/// Per-player drained observations, in player-ID order.
///
/// Values preserve mailbox arrival order. A player with no pending
/// messages maps to an empty vector.
pub type Observations = IndexMap<PlayerId, Vec<Observation>>;

/// The resolved result of a finished episode.
///
/// Constructed exactly once, when a terminal or truncating condition is
/// reached; immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// The winning players. A strict subset for decisive outcomes;
    /// equal to the full player set for draws and cooperative finishes.
    pub winners: SmallVec<[PlayerId; 4]>,
    /// Human-readable resolution reason.
    pub reason: String,
    /// Final reward per player.
    pub rewards: RewardVec,
}

/// Typed auxiliary information returned with every step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// The resolution reason. Always present once the episode is over.
    pub reason: Option<String>,
    /// Whether this step recorded an invalid move.
    pub invalid_move: bool,
}

/// The result of one step of an episode.
///
/// Mirrors the `(observations, rewards, truncated, terminated, info)`
/// contract: a caller always receives a well-formed `Step`, never an
/// error, during normal play.
///
/// # Examples
///
/// ```
/// use parley_core::{Step, StepInfo};
///
/// let step = Step {
///     observations: Default::default(),
///     rewards: None,
///     truncated: false,
///     terminated: false,
///     info: StepInfo::default(),
/// };
/// assert!(!step.is_over());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Messages drained from every player's mailbox at the end of the step.
    pub observations: Observations,
    /// Final rewards, present only once the episode is over.
    pub rewards: Option<RewardVec>,
    /// The episode ended by hitting an external limit (turn count).
    pub truncated: bool,
    /// The episode ended by a rule-defined outcome (win, loss, draw,
    /// invalid-move penalty).
    pub terminated: bool,
    /// Auxiliary step information.
    pub info: StepInfo,
}

impl Step {
    /// Whether the episode has ended, by either termination or truncation.
    pub fn is_over(&self) -> bool {
        self.terminated || self.truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_over_flags() {
        let mut step = Step {
            observations: Observations::default(),
            rewards: None,
            truncated: false,
            terminated: false,
            info: StepInfo::default(),
        };
        assert!(!step.is_over());
        step.truncated = true;
        assert!(step.is_over());
        step.truncated = false;
        step.terminated = true;
        assert!(step.is_over());
    }

    #[test]
    fn reward_vec_stays_inline_for_two_players() {
        let rewards: RewardVec = [1.0, -1.0].into_iter().collect();
        assert!(!rewards.spilled());
        assert_eq!(rewards.as_slice(), &[1.0, -1.0]);
    }
}
