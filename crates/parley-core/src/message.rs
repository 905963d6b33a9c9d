//! Message addressing and the [`Observation`] record.
//!
//! Senders and recipients are tagged enums rather than sentinel integers,
//! so recipient matching is exhaustive and a system message can never
//! collide with a real player ID.

use std::fmt;

use crate::id::{PlayerId, TurnId};

/// The originator of a routed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sender {
    /// The orchestration core or the game itself (rule notices,
    /// correction messages, initial prompts).
    System,
    /// A specific player, typically echoing their own submitted action.
    Player(PlayerId),
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Player(id) => write!(f, "player {id}"),
        }
    }
}

/// The destination of a routed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recipient {
    /// Deliver to every player's mailbox in one call.
    Broadcast,
    /// Deliver to a single player's mailbox.
    Player(PlayerId),
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Broadcast => write!(f, "broadcast"),
            Self::Player(id) => write!(f, "player {id}"),
        }
    }
}

/// One queued message as seen by its recipient.
///
/// Observations accumulate in a player's mailbox and are returned, in
/// arrival order, when that player's mailbox is next drained.
///
/// # Examples
///
/// ```
/// use parley_core::{Observation, PlayerId, Sender, TurnId};
///
/// let obs = Observation {
///     from: Sender::Player(PlayerId(0)),
///     text: "[A0 B0]".to_string(),
///     turn: TurnId(4),
/// };
/// assert_eq!(obs.from, Sender::Player(PlayerId(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Who sent the message.
    pub from: Sender,
    /// The message body.
    pub text: String,
    /// The turn on which the message was routed.
    pub turn: TurnId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_display() {
        assert_eq!(format!("{}", Sender::System), "system");
        assert_eq!(format!("{}", Sender::Player(PlayerId(1))), "player 1");
    }

    #[test]
    fn recipient_display() {
        assert_eq!(format!("{}", Recipient::Broadcast), "broadcast");
        assert_eq!(format!("{}", Recipient::Player(PlayerId(0))), "player 0");
    }
}
