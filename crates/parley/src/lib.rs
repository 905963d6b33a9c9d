//! Parley: turn-based multi-agent text games behind one orchestration core.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Parley sub-crates. For most users, adding `parley` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use parley::prelude::*;
//!
//! // A two-player alternating episode with a 40-turn cap.
//! let config = EpisodeConfig {
//!     max_turns: Some(40),
//!     invalid_move_policy: InvalidMovePolicy::Terminate,
//!     ..EpisodeConfig::new(2)
//! };
//! let mut episode: Episode<Vec<String>> = Episode::new(config).unwrap();
//!
//! // Seed every player's first observation.
//! let initial = episode.reset(
//!     Vec::new(),
//!     |player, _state| format!("You are player {player}. Moves look like [A0 B0]."),
//!     Some(42),
//! );
//! assert_eq!(initial.len(), 2);
//!
//! // A session validates one action, routes messages, and finalizes the turn.
//! let player = episode.current_player_id();
//! if !check_format("[A0 B0]", |a| a.starts_with('[') && a.ends_with(']')) {
//!     episode.set_invalid_move(&[(player, "moves must be bracketed")]);
//! }
//! let step = episode.step();
//! assert!(!step.is_over());
//! assert_eq!(episode.current_player_id(), PlayerId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `parley-core` | IDs, message addressing, step/outcome records, the `Env` trait |
//! | [`obs`] | `parley-obs` | Mailboxes, message router, permanent transcript |
//! | [`engine`] | `parley-engine` | Episode orchestrator, clock, buffer, policies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`parley-core`).
///
/// Contains player and turn IDs, the [`types::Sender`] /
/// [`types::Recipient`] addressing enums, observation and outcome
/// records, error types, and the [`types::Env`] game-session trait.
pub use parley_core as types;

/// Observation routing and transcripts (`parley-obs`).
///
/// Provides [`obs::Router`], the per-player [`obs::Mailboxes`], and the
/// append-only [`obs::Transcript`] used for post-hoc inspection.
pub use parley_obs as obs;

/// Episode orchestration (`parley-engine`).
///
/// [`engine::Episode`] is the shared core every game session drives;
/// [`engine::EpisodeConfig`] declares player count, turn style, turn
/// limit, and invalid-move policy.
pub use parley_engine as engine;

/// Common imports for typical Parley usage.
///
/// ```rust
/// use parley::prelude::*;
/// ```
///
/// This imports the most frequently used types: the episode
/// orchestrator and its configuration, core IDs and addressing, step
/// and outcome records, and the game-session trait.
pub mod prelude {
    // Core types and traits
    pub use parley_core::{
        Env, Observation, Observations, Outcome, PlayerId, Recipient, RewardVec, Sender, Step,
        StepInfo, TurnId,
    };

    // Errors
    pub use parley_core::{RouteError, StageError};

    // Observation routing
    pub use parley_obs::{LogEntry, Router, Transcript};

    // Engine
    pub use parley_engine::{
        check_format, ActionBatch, ActionBuffer, ConfigError, Episode, EpisodeConfig,
        InvalidMove, InvalidMovePolicy, RoundPhase, TurnClock, TurnStyle,
    };
}
