//! Test utilities and fixture games for Parley development.
//!
//! The fixtures here implement the game-session contract against the
//! orchestration core with the least possible rules, one per turn
//! style and penalty policy, so engine behavior can be exercised
//! end-to-end without a real game.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    bracketed_token, ClashState, CountdownPuzzle, CountdownState, DuelState, ScriptedDuel,
    SignalClash,
};
