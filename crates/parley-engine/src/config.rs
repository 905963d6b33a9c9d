//! Episode configuration, validation, and error types.
//!
//! [`EpisodeConfig`] is the construction input for an
//! [`Episode`](crate::Episode). [`validate()`](EpisodeConfig::validate)
//! rejects fatal conditions at construction time, before any `reset` —
//! rule violations during play never surface as errors.

use std::error::Error;
use std::fmt;

// ── Policies ───────────────────────────────────────────────────────

/// What happens when a player submits an invalid move.
///
/// A per-episode configuration choice the game session declares, never
/// inferred from game type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMovePolicy {
    /// A single invalid move ends the episode: −1 for each offender,
    /// +1 for every other player. Used by strictly-alternating
    /// adversarial games.
    Terminate,
    /// The episode continues; the offending player keeps the turn and
    /// is re-prompted. Used by puzzle and collaborative games.
    Retry,
}

/// How player turns are scheduled within the episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStyle {
    /// Players act one at a time; every finalized action advances the
    /// turn counter and rotates the turn to the next player.
    Sequential,
    /// Every active player submits one action per round; the turn
    /// counter advances once per resolved round.
    Simultaneous,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EpisodeConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The episode has zero players.
    NoPlayers,
    /// The player count does not fit the player-ID space.
    PlayerCountOverflow {
        /// The configured count that overflowed.
        value: usize,
    },
    /// `max_turns` was set to zero, which would truncate before any play.
    ZeroTurnLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlayers => write!(f, "episode must have at least one player"),
            Self::PlayerCountOverflow { value } => {
                write!(f, "player count {value} exceeds u32::MAX")
            }
            Self::ZeroTurnLimit => write!(f, "max_turns must be at least 1 when set"),
        }
    }
}

impl Error for ConfigError {}

// ── EpisodeConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing an episode.
///
/// # Examples
///
/// ```
/// use parley_engine::{EpisodeConfig, InvalidMovePolicy, TurnStyle};
///
/// let config = EpisodeConfig {
///     max_turns: Some(40),
///     invalid_move_policy: InvalidMovePolicy::Terminate,
///     ..EpisodeConfig::new(2)
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.turn_style, TurnStyle::Sequential);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeConfig {
    /// Number of players. Must be at least 1.
    pub player_count: usize,
    /// Optional turn limit; `None` is unbounded. In simultaneous games
    /// this counts resolved rounds, in sequential games individual turns.
    pub max_turns: Option<u64>,
    /// Penalty policy for invalid moves.
    pub invalid_move_policy: InvalidMovePolicy,
    /// Turn scheduling model.
    pub turn_style: TurnStyle,
}

impl EpisodeConfig {
    /// A sequential, terminate-on-invalid, unbounded configuration for
    /// `player_count` players. Adjust fields as needed.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            max_turns: None,
            invalid_move_policy: InvalidMovePolicy::Terminate,
            turn_style: TurnStyle::Sequential,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if u32::try_from(self.player_count).is_err() {
            return Err(ConfigError::PlayerCountOverflow {
                value: self.player_count,
            });
        }
        if self.max_turns == Some(0) {
            return Err(ConfigError::ZeroTurnLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_two_player_succeeds() {
        assert!(EpisodeConfig::new(2).validate().is_ok());
    }

    #[test]
    fn validate_zero_players_fails() {
        match EpisodeConfig::new(0).validate() {
            Err(ConfigError::NoPlayers) => {}
            other => panic!("expected NoPlayers, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_turn_limit_fails() {
        let cfg = EpisodeConfig {
            max_turns: Some(0),
            ..EpisodeConfig::new(2)
        };
        match cfg.validate() {
            Err(ConfigError::ZeroTurnLimit) => {}
            other => panic!("expected ZeroTurnLimit, got {other:?}"),
        }
    }

    #[test]
    fn validate_overflowing_player_count_fails() {
        let cfg = EpisodeConfig::new(u32::MAX as usize + 1);
        match cfg.validate() {
            Err(ConfigError::PlayerCountOverflow { .. }) => {}
            other => panic!("expected PlayerCountOverflow, got {other:?}"),
        }
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            format!("{}", ConfigError::NoPlayers),
            "episode must have at least one player"
        );
        assert!(format!(
            "{}",
            ConfigError::PlayerCountOverflow { value: 5_000_000_000 }
        )
        .contains("5000000000"));
    }
}
