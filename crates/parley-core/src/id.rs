//! Strongly-typed identifiers for players and turns.

use std::fmt;

/// Identifies a player within an episode.
///
/// Players are assigned dense sequential IDs at episode construction:
/// `PlayerId(n)` is the n-th seat, `0 <= n < player_count`. The ID
/// doubles as the index into per-player storage (mailboxes, reward
/// vectors, pending-action slots).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// The player's position as a storage index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing turn counter.
///
/// Starts at 0 after `reset` and only ever increases within an episode.
/// In sequential games one turn is one player's action; in
/// simultaneous-move games one turn is one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId(pub u64);

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TurnId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_display_and_index() {
        let p = PlayerId(3);
        assert_eq!(format!("{p}"), "3");
        assert_eq!(p.index(), 3);
        assert_eq!(PlayerId::from(7u32), PlayerId(7));
    }

    #[test]
    fn turn_id_orders_monotonically() {
        assert!(TurnId(0) < TurnId(1));
        assert_eq!(format!("{}", TurnId(12)), "12");
        assert_eq!(TurnId::from(5u64), TurnId(5));
    }

    // ── proptest ───────────────────────────────────────────────

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Display output always round-trips back to the same ID.
            #[test]
            fn player_id_display_round_trips(raw in any::<u32>()) {
                let id = PlayerId(raw);
                let parsed: u32 = format!("{id}").parse().unwrap();
                prop_assert_eq!(PlayerId(parsed), id);
            }

            /// Ordering of turn IDs matches ordering of the raw counters.
            #[test]
            fn turn_id_order_matches_raw(a in any::<u64>(), b in any::<u64>()) {
                prop_assert_eq!(TurnId(a) < TurnId(b), a < b);
            }
        }
    }
}
