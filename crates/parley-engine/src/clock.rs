//! The episode clock: turn counting, turn rotation, and the turn limit.

use parley_core::{PlayerId, TurnId};

/// Tracks whose turn it is, how many turns have elapsed, and whether
/// the configured turn limit has been reached.
///
/// The clock is the only source of whose-turn truth. Rotation is
/// deterministic: `PlayerId(0)` acts first after a reset, and each
/// advancing turn hands the pointer to the next seat modulo the player
/// count. The turn limit is checked once per advance, never mid-round.
#[derive(Clone, Debug)]
pub struct TurnClock {
    player_count: u32,
    current: PlayerId,
    turn: TurnId,
    max_turns: Option<u64>,
}

impl TurnClock {
    /// Create a clock for `player_count` players.
    ///
    /// `player_count` must be nonzero; the episode configuration
    /// validates this before the clock is built.
    pub fn new(player_count: u32, max_turns: Option<u64>) -> Self {
        debug_assert!(player_count > 0);
        Self {
            player_count,
            current: PlayerId(0),
            turn: TurnId(0),
            max_turns,
        }
    }

    /// Reset to turn 0 with `PlayerId(0)` to act.
    pub fn reset(&mut self) {
        self.current = PlayerId(0);
        self.turn = TurnId(0);
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The current turn index.
    pub fn turn(&self) -> TurnId {
        self.turn
    }

    /// The configured turn limit, if any.
    pub fn max_turns(&self) -> Option<u64> {
        self.max_turns
    }

    /// The number of players the clock rotates over.
    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    /// Finalize a turn.
    ///
    /// With `advance_turn` true, increments the turn counter, rotates
    /// the current player to the next seat, and returns whether the
    /// turn limit was reached by this advance. With `advance_turn`
    /// false, nothing moves — the same player retains the turn (the
    /// "try again" flow after a recoverable invalid move) and the limit
    /// is not checked.
    pub fn advance(&mut self, advance_turn: bool) -> bool {
        if !advance_turn {
            return false;
        }
        self.turn = TurnId(self.turn.0 + 1);
        self.rotate();
        self.max_turns.is_some_and(|max| self.turn.0 >= max)
    }

    /// Hand the turn pointer to the next seat without consuming a turn.
    ///
    /// Used while a simultaneous round is still collecting submissions:
    /// every player gets a slot, but the round counts as one turn only
    /// once it resolves.
    pub fn rotate(&mut self) {
        self.current = PlayerId((self.current.0 + 1) % self.player_count);
    }
}
