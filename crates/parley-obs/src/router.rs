//! Message routing between players.

use indexmap::IndexMap;

use parley_core::{Observation, Observations, PlayerId, Recipient, RouteError, Sender, TurnId};

use crate::mailbox::Mailboxes;
use crate::transcript::{LogEntry, Transcript};

/// Routes messages to per-player mailboxes and the permanent transcript.
///
/// Supports broadcast and private delivery. A broadcast lands in every
/// mailbox but is logged once, with its original addressing. The router
/// performs no I/O; its only side effect is internal queue mutation.
///
/// # Examples
///
/// ```
/// use parley_core::{PlayerId, Recipient, Sender, TurnId};
/// use parley_obs::Router;
///
/// let mut router = Router::new(2);
/// router
///     .send(Sender::System, Recipient::Broadcast, "round start", true, TurnId(0))
///     .unwrap();
/// assert_eq!(router.drain(PlayerId(0)).len(), 1);
/// assert_eq!(router.drain(PlayerId(1)).len(), 1);
/// assert_eq!(router.transcript().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Router {
    mailboxes: Mailboxes,
    transcript: Transcript,
}

impl Router {
    /// Create a router for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            mailboxes: Mailboxes::new(player_count),
            transcript: Transcript::new(),
        }
    }

    /// The number of players served by this router.
    pub fn player_count(&self) -> usize {
        self.mailboxes.player_count()
    }

    /// Route one message.
    ///
    /// Broadcast messages are appended to every player's mailbox;
    /// private messages to the single target. If `loggable`, the message
    /// is also appended to the permanent transcript, regardless of
    /// recipient.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownPlayer`] if a private recipient is outside
    /// the player set. Nothing is queued or logged in that case.
    pub fn send(
        &mut self,
        from: Sender,
        to: Recipient,
        text: impl Into<String>,
        loggable: bool,
        turn: TurnId,
    ) -> Result<(), RouteError> {
        let text = text.into();
        match to {
            Recipient::Broadcast => {
                let obs = Observation {
                    from,
                    text: text.clone(),
                    turn,
                };
                self.mailboxes.push_all(&obs);
            }
            Recipient::Player(player) => {
                let obs = Observation {
                    from,
                    text: text.clone(),
                    turn,
                };
                if !self.mailboxes.push(player, obs) {
                    return Err(RouteError::UnknownPlayer {
                        player,
                        player_count: self.player_count(),
                    });
                }
            }
        }
        if loggable {
            self.transcript.append(LogEntry {
                from,
                to,
                text,
                turn,
            });
        }
        Ok(())
    }

    /// Return and clear everything queued for one player, in arrival order.
    pub fn drain(&mut self, player: PlayerId) -> Vec<Observation> {
        self.mailboxes.drain(player)
    }

    /// Drain every player's mailbox into a per-player map, in player-ID
    /// order.
    pub fn drain_all(&mut self) -> Observations {
        let mut all = IndexMap::with_capacity(self.player_count());
        for id in 0..self.player_count() as u32 {
            let player = PlayerId(id);
            all.insert(player, self.mailboxes.drain(player));
        }
        all
    }

    /// The number of messages currently queued for one player.
    pub fn pending(&self, player: PlayerId) -> usize {
        self.mailboxes.pending(player)
    }

    /// The permanent transcript. Read-only; never cleared during an episode.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Empty all mailboxes and discard the transcript. Called only
    /// between episodes.
    pub fn clear(&mut self) {
        self.mailboxes.clear();
        self.transcript.clear();
    }
}
