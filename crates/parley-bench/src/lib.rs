//! Benchmark profiles and utilities for the Parley framework.
//!
//! Provides pre-built [`EpisodeConfig`] profiles shared by the
//! benchmarks:
//!
//! - [`duel_profile`]: two-player sequential, terminate-on-invalid
//! - [`arena_profile`]: n-player simultaneous rounds

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use parley_engine::{EpisodeConfig, InvalidMovePolicy, TurnStyle};

/// Two-player sequential profile with a generous turn cap.
pub fn duel_profile() -> EpisodeConfig {
    EpisodeConfig {
        max_turns: Some(10_000),
        invalid_move_policy: InvalidMovePolicy::Terminate,
        ..EpisodeConfig::new(2)
    }
}

/// `players`-seat simultaneous profile with a generous round cap.
pub fn arena_profile(players: usize) -> EpisodeConfig {
    EpisodeConfig {
        max_turns: Some(10_000),
        invalid_move_policy: InvalidMovePolicy::Retry,
        turn_style: TurnStyle::Simultaneous,
        ..EpisodeConfig::new(players)
    }
}
