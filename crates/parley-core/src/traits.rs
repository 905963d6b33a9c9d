//! The game-session capability trait.

use crate::outcome::{Observations, Step};

/// The contract a specific game implements against the orchestration core.
///
/// This is a capability interface, not a base class: concrete games own
/// their rules and state privately and expose only episode lifecycle.
/// The driving harness is expected to feed each player's drained
/// observations to an agent (human or model-driven) and pass the agent's
/// raw reply back into [`step`](Env::step).
///
/// Implementations must tolerate malformed or empty action strings:
/// anything that fails the game's validity predicate is routed through
/// the invalid-move machinery, never surfaced as a panic or error.
pub trait Env {
    /// Start a new episode, returning each player's initial observations.
    ///
    /// `seed` controls all game-owned randomness for the episode; `None`
    /// seeds from the operating system.
    fn reset(&mut self, seed: Option<u64>) -> Observations;

    /// Execute one action and finalize the turn.
    ///
    /// For sequential games the acting player is implied by the episode
    /// clock. Simultaneous-move games stage the action for the implied
    /// player and resolve the round once every player has submitted.
    fn step(&mut self, action: &str) -> Step;

    /// A plain-text rendering of the current game state.
    ///
    /// Display is a collaborator concern; the default is empty.
    fn render(&self) -> String {
        String::new()
    }

    /// Names of the state components a terminal renderer displays after
    /// the episode ends. The default exposes nothing.
    fn terminal_render_keys(&self) -> Vec<String> {
        Vec::new()
    }
}
