//! Per-player message queues.

use parley_core::{Observation, PlayerId};

/// One FIFO mailbox per player.
///
/// Messages accumulate in arrival order and are removed only by
/// [`drain`](Mailboxes::drain). Draining is idempotent on emptiness:
/// repeated drains return nothing until new messages arrive.
#[derive(Clone, Debug, Default)]
pub struct Mailboxes {
    queues: Vec<Vec<Observation>>,
}

impl Mailboxes {
    /// Create one empty mailbox per player.
    pub fn new(player_count: usize) -> Self {
        Self {
            queues: vec![Vec::new(); player_count],
        }
    }

    /// The number of mailboxes.
    pub fn player_count(&self) -> usize {
        self.queues.len()
    }

    /// Append a message to one player's mailbox.
    ///
    /// Returns `false` if the player is outside the episode's player
    /// set; the message is dropped in that case.
    pub fn push(&mut self, player: PlayerId, obs: Observation) -> bool {
        match self.queues.get_mut(player.index()) {
            Some(queue) => {
                queue.push(obs);
                true
            }
            None => false,
        }
    }

    /// Append a message to every player's mailbox.
    pub fn push_all(&mut self, obs: &Observation) {
        for queue in &mut self.queues {
            queue.push(obs.clone());
        }
    }

    /// Return and clear everything queued for one player, in arrival
    /// order. A player outside the episode drains nothing.
    pub fn drain(&mut self, player: PlayerId) -> Vec<Observation> {
        self.queues
            .get_mut(player.index())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// The number of messages currently queued for one player.
    pub fn pending(&self, player: PlayerId) -> usize {
        self.queues.get(player.index()).map_or(0, Vec::len)
    }

    /// Empty every mailbox without returning the contents.
    pub fn clear(&mut self) {
        for queue in &mut self.queues {
            queue.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::{Sender, TurnId};

    fn obs(text: &str) -> Observation {
        Observation {
            from: Sender::System,
            text: text.to_string(),
            turn: TurnId(0),
        }
    }

    #[test]
    fn push_and_drain_preserve_arrival_order() {
        let mut boxes = Mailboxes::new(2);
        assert!(boxes.push(PlayerId(0), obs("first")));
        assert!(boxes.push(PlayerId(0), obs("second")));
        let drained = boxes.drain(PlayerId(0));
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].text, "first");
        assert_eq!(drained[1].text, "second");
    }

    #[test]
    fn drain_is_idempotent_on_emptiness() {
        let mut boxes = Mailboxes::new(1);
        boxes.push(PlayerId(0), obs("hello"));
        assert_eq!(boxes.drain(PlayerId(0)).len(), 1);
        assert!(boxes.drain(PlayerId(0)).is_empty());
        assert!(boxes.drain(PlayerId(0)).is_empty());
    }

    #[test]
    fn push_out_of_range_is_dropped() {
        let mut boxes = Mailboxes::new(2);
        assert!(!boxes.push(PlayerId(2), obs("nobody home")));
        assert_eq!(boxes.pending(PlayerId(0)), 0);
        assert_eq!(boxes.pending(PlayerId(1)), 0);
    }

    #[test]
    fn push_all_reaches_every_mailbox() {
        let mut boxes = Mailboxes::new(3);
        boxes.push_all(&obs("to everyone"));
        for id in 0..3 {
            assert_eq!(boxes.pending(PlayerId(id)), 1);
        }
    }
}
