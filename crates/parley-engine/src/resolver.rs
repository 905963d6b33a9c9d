//! Reward-vector construction for terminal and truncated episodes.
//!
//! Pure functions over the player count; the episode decides *when* an
//! outcome happens, these decide *what* each seat is paid.

use parley_core::{PlayerId, RewardVec};

/// Zero-sum rewards: +1 for every winner, −1 for everyone else.
///
/// The caller guarantees `winners` is a strict, nonempty subset of the
/// player set; full-set and empty outcomes are draws and use
/// [`draw`] instead.
pub fn zero_sum(winners: &[PlayerId], player_count: usize) -> RewardVec {
    let mut rewards: RewardVec = std::iter::repeat(-1.0).take(player_count).collect();
    for winner in winners {
        if let Some(slot) = rewards.get_mut(winner.index()) {
            *slot = 1.0;
        }
    }
    rewards
}

/// Draw rewards: 0 for every player.
pub fn draw(player_count: usize) -> RewardVec {
    std::iter::repeat(0.0).take(player_count).collect()
}

/// Invalid-move penalty rewards: −1 for every offender, +1 for every
/// other player.
///
/// In the pathological case where every player offended there is no one
/// left to pay, and the outcome degrades to a draw (0 for all).
pub fn penalize(offenders: &[PlayerId], player_count: usize) -> RewardVec {
    let offending = |id: usize| offenders.iter().any(|p| p.index() == id);
    if (0..player_count).all(offending) {
        return draw(player_count);
    }
    let mut rewards: RewardVec = std::iter::repeat(1.0).take(player_count).collect();
    for offender in offenders {
        if let Some(slot) = rewards.get_mut(offender.index()) {
            *slot = -1.0;
        }
    }
    rewards
}
