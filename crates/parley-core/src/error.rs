//! Error types for the Parley orchestration core.
//!
//! Rule violations during play are never surfaced as errors — they feed
//! the invalid-move machinery so that callers always receive a
//! well-formed step result. The enums here cover contract misuse
//! (addressing an unknown player) and rejected construction.

use std::error::Error;
use std::fmt;

use crate::id::PlayerId;

/// Errors from observation routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// A private message addressed a player ID outside the episode's
    /// player set.
    UnknownPlayer {
        /// The invalid recipient.
        player: PlayerId,
        /// The number of players in the episode.
        player_count: usize,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlayer {
                player,
                player_count,
            } => write!(
                f,
                "unknown recipient: player {player} (episode has {player_count} players)"
            ),
        }
    }
}

impl Error for RouteError {}

/// Errors from staging an action into the simultaneous-action buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageError {
    /// The submitting player ID is outside the episode's player set.
    UnknownPlayer {
        /// The invalid submitter.
        player: PlayerId,
        /// The number of players in the episode.
        player_count: usize,
    },
    /// The episode has already terminated or truncated; no further
    /// actions are accepted.
    EpisodeOver,
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlayer {
                player,
                player_count,
            } => write!(
                f,
                "unknown submitter: player {player} (episode has {player_count} players)"
            ),
            Self::EpisodeOver => write!(f, "episode is over; action rejected"),
        }
    }
}

impl Error for StageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_error_display() {
        let err = RouteError::UnknownPlayer {
            player: PlayerId(5),
            player_count: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("player 5"));
        assert!(msg.contains("2 players"));
    }

    #[test]
    fn stage_error_display() {
        let err = StageError::EpisodeOver;
        assert_eq!(format!("{err}"), "episode is over; action rejected");
    }
}
