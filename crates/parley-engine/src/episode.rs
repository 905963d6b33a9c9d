//! The episode orchestrator.
//!
//! [`Episode`] ties the clock, router, validator, buffer, and reward
//! resolution together behind the contract every game session drives:
//! `reset` seeds the players' first observations, the session validates
//! and applies one action, routes messages, and `step()` finalizes the
//! turn into the `(observations, rewards, truncated, terminated, info)`
//! tuple.
//!
//! # Ownership model
//!
//! `Episode<G>` is [`Send`] (can be moved between threads) but not
//! shared: all mutating methods take `&mut self`, and execution is
//! single-threaded and synchronous — every public operation runs to
//! completion before the next. A host exposing one episode across real
//! threads must serialize calls with a mutex or actor mailbox.
//!
//! # Game state
//!
//! The game-defined state record `G` is owned by the episode but never
//! inspected by it: the core only hands `&G` to the prompt callback at
//! reset and back to the session through the accessors.

use std::fmt;
use std::mem;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use parley_core::{
    Observation, Observations, Outcome, PlayerId, Recipient, RewardVec, RouteError, Sender,
    StageError, Step, StepInfo, TurnId,
};
use parley_obs::{Router, Transcript};

use crate::buffer::{ActionBatch, ActionBuffer, RoundPhase};
use crate::clock::TurnClock;
use crate::config::{ConfigError, EpisodeConfig, InvalidMovePolicy, TurnStyle};
use crate::resolver;
use crate::validator::{InvalidMove, InvalidMoveTracker};

// Compile-time assertion: Episode is Send for Send game state.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Episode<()>>();
    }
};

/// One complete play-through from `reset` to a terminal or truncated
/// state, generic over the game-defined state record `G`.
///
/// # Example
///
/// ```
/// use parley_core::PlayerId;
/// use parley_engine::{Episode, EpisodeConfig};
///
/// let mut episode: Episode<Vec<String>> =
///     Episode::new(EpisodeConfig::new(2)).unwrap();
/// let initial = episode.reset(
///     Vec::new(),
///     |player, _state| format!("You are player {player}."),
///     Some(42),
/// );
/// assert_eq!(initial[&PlayerId(0)].len(), 1);
/// assert_eq!(episode.current_player_id(), PlayerId(0));
/// ```
pub struct Episode<G> {
    policy: InvalidMovePolicy,
    style: TurnStyle,
    clock: TurnClock,
    router: Router,
    tracker: InvalidMoveTracker,
    buffer: ActionBuffer,
    outcome: Option<Outcome>,
    terminated: bool,
    truncated: bool,
    hold_turn: bool,
    round_resolved: bool,
    invalid_this_step: bool,
    finalized: bool,
    tiebreak: Option<SmallVec<[PlayerId; 4]>>,
    game_state: Option<G>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl<G> Episode<G> {
    /// Create an episode from a validated configuration.
    ///
    /// The episode is inert until [`reset`](Episode::reset) is called.
    pub fn new(config: EpisodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let player_count = config.player_count;
        Ok(Self {
            policy: config.invalid_move_policy,
            style: config.turn_style,
            clock: TurnClock::new(player_count as u32, config.max_turns),
            router: Router::new(player_count),
            tracker: InvalidMoveTracker::new(),
            buffer: ActionBuffer::new(player_count),
            outcome: None,
            terminated: false,
            truncated: false,
            hold_turn: false,
            round_resolved: false,
            invalid_this_step: false,
            finalized: false,
            tiebreak: None,
            game_state: None,
            rng: ChaCha8Rng::seed_from_u64(0),
            seed: 0,
        })
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Start a new play-through.
    ///
    /// Zeroes the clock, clears every buffer and the transcript,
    /// reseeds the episode RNG (`None` seeds from the operating
    /// system), installs `game_state`, and seeds each player's mailbox
    /// with `prompt_fn(player_id, &game_state)`. Returns the drained
    /// initial observations.
    pub fn reset<F>(&mut self, game_state: G, prompt_fn: F, seed: Option<u64>) -> Observations
    where
        F: Fn(PlayerId, &G) -> String,
    {
        self.seed = seed.unwrap_or_else(rand::random);
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.clock.reset();
        self.router.clear();
        self.tracker.clear();
        self.buffer.clear();
        self.outcome = None;
        self.terminated = false;
        self.truncated = false;
        self.hold_turn = false;
        self.round_resolved = false;
        self.invalid_this_step = false;
        self.finalized = false;
        self.tiebreak = None;
        self.game_state = Some(game_state);

        let state = self
            .game_state
            .as_ref()
            .expect("game state installed above");
        let prompts: Vec<String> = (0..self.player_count() as u32)
            .map(|id| prompt_fn(PlayerId(id), state))
            .collect();
        for (id, prompt) in prompts.into_iter().enumerate() {
            self.router
                .send(
                    Sender::System,
                    Recipient::Player(PlayerId(id as u32)),
                    prompt,
                    true,
                    TurnId(0),
                )
                .expect("player ids are in range");
        }
        self.router.drain_all()
    }

    /// Finalize the current turn.
    ///
    /// Applies whatever the session decided since the previous step:
    /// a declared outcome ends the episode without advancing the clock;
    /// a recoverable invalid move holds the turn for a retry; otherwise
    /// the clock advances (sequential) or the round bookkeeping runs
    /// (simultaneous) and the turn limit is checked. Drains every
    /// player's mailbox into the returned tuple.
    ///
    /// Once the episode is over, further calls are accepted and no-op:
    /// they echo the terminal flags, rewards, and reason with empty
    /// observations.
    pub fn step(&mut self) -> Step {
        if self.finalized {
            return self.terminal_echo();
        }
        let invalid = mem::take(&mut self.invalid_this_step);
        if self.outcome.is_none() {
            let limit_hit = if mem::take(&mut self.hold_turn) {
                self.clock.advance(false)
            } else {
                match self.style {
                    TurnStyle::Sequential => self.clock.advance(true),
                    TurnStyle::Simultaneous => {
                        if mem::take(&mut self.round_resolved) {
                            self.clock.advance(true)
                        } else {
                            self.clock.rotate();
                            false
                        }
                    }
                }
            };
            if limit_hit {
                self.truncated = true;
                self.outcome = Some(self.truncation_outcome());
            }
        }
        if self.outcome.is_some() {
            self.finalized = true;
        }
        Step {
            observations: self.router.drain_all(),
            rewards: self.outcome.as_ref().map(|o| o.rewards.clone()),
            truncated: self.truncated,
            terminated: self.terminated,
            info: StepInfo {
                reason: self.outcome.as_ref().map(|o| o.reason.clone()),
                invalid_move: invalid,
            },
        }
    }

    fn truncation_outcome(&mut self) -> Outcome {
        match self.tiebreak.take() {
            Some(winners) if !winners.is_empty() => Outcome {
                rewards: resolver::zero_sum(&winners, self.player_count()),
                reason: "turn limit reached; tie-break decides the winner".to_string(),
                winners,
            },
            _ => Outcome {
                winners: self.all_players(),
                reason: "turn limit reached".to_string(),
                rewards: resolver::draw(self.player_count()),
            },
        }
    }

    fn terminal_echo(&self) -> Step {
        Step {
            observations: Observations::default(),
            rewards: self.outcome.as_ref().map(|o| o.rewards.clone()),
            truncated: self.truncated,
            terminated: self.terminated,
            info: StepInfo {
                reason: self.outcome.as_ref().map(|o| o.reason.clone()),
                invalid_move: false,
            },
        }
    }

    // ── Session-facing mutators ─────────────────────────────────

    /// Route one message to a player or to everyone.
    ///
    /// Tagged with the current turn. If `for_logging`, the message is
    /// also appended to the permanent transcript. No-op once the
    /// episode is over.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownPlayer`] if a private recipient is outside
    /// the player set.
    pub fn add_observation(
        &mut self,
        from: Sender,
        to: Recipient,
        message: impl Into<String>,
        for_logging: bool,
    ) -> Result<(), RouteError> {
        if self.is_over() {
            return Ok(());
        }
        let turn = self.clock.turn();
        self.router.send(from, to, message, for_logging, turn)
    }

    /// Record invalid moves and apply the configured penalty policy.
    ///
    /// Each offender receives a private system correction carrying the
    /// reason (also logged). Under
    /// [`InvalidMovePolicy::Terminate`] the episode ends immediately:
    /// −1 for each offender, +1 for everyone else, or a 0-for-all draw
    /// if every player offended. Under [`InvalidMovePolicy::Retry`] the
    /// offending player keeps the turn on the next [`step`](Episode::step).
    ///
    /// Calling this after the episode is over is a no-op, so a
    /// terminal outcome is never double-penalized.
    pub fn set_invalid_move(&mut self, offenders: &[(PlayerId, &str)]) {
        if self.is_over() || offenders.is_empty() {
            return;
        }
        let turn = self.clock.turn();
        for (player, reason) in offenders {
            self.tracker.record(*player, *reason, turn);
            self.router
                .send(
                    Sender::System,
                    Recipient::Player(*player),
                    *reason,
                    true,
                    turn,
                )
                .expect("offender ids are in range");
        }
        self.invalid_this_step = true;
        match self.policy {
            InvalidMovePolicy::Terminate => {
                let offending: Vec<PlayerId> = offenders.iter().map(|(p, _)| *p).collect();
                let rewards = resolver::penalize(&offending, self.player_count());
                let winners: SmallVec<[PlayerId; 4]> = if rewards.iter().all(|&r| r == 0.0) {
                    self.all_players()
                } else {
                    (0..self.player_count() as u32)
                        .map(PlayerId)
                        .filter(|p| !offending.contains(p))
                        .collect()
                };
                let reason = offenders
                    .iter()
                    .map(|(_, r)| *r)
                    .collect::<Vec<_>>()
                    .join("; ");
                self.outcome = Some(Outcome {
                    winners,
                    reason,
                    rewards,
                });
                self.terminated = true;
            }
            InvalidMovePolicy::Retry => {
                self.hold_turn = true;
            }
        }
    }

    /// Declare the winners and end the episode.
    ///
    /// A strict subset of the players is scored zero-sum (+1 winners,
    /// −1 everyone else). The full player set is a declared draw and
    /// scores 0 for all — cooperative shared scores are specified
    /// explicitly via [`set_outcome`](Episode::set_outcome), never
    /// inferred. A single-player episode's sole winner scores +1.
    /// No-op once the episode is over.
    pub fn set_winners(&mut self, winners: &[PlayerId], reason: impl Into<String>) {
        if self.is_over() {
            return;
        }
        let count = self.player_count();
        let winners: SmallVec<[PlayerId; 4]> = winners
            .iter()
            .copied()
            .filter(|p| p.index() < count)
            .collect();
        let rewards = if count == 1 {
            [1.0].into_iter().collect()
        } else if winners.len() == count {
            resolver::draw(count)
        } else {
            resolver::zero_sum(&winners, count)
        };
        self.outcome = Some(Outcome {
            winners,
            reason: reason.into(),
            rewards,
        });
        self.terminated = true;
    }

    /// End the episode in a draw: 0 for every player.
    pub fn set_draw(&mut self, reason: impl Into<String>) {
        if self.is_over() {
            return;
        }
        self.outcome = Some(Outcome {
            winners: self.all_players(),
            reason: reason.into(),
            rewards: resolver::draw(self.player_count()),
        });
        self.terminated = true;
    }

    /// End the episode with explicit per-player rewards.
    ///
    /// The path for cooperative and shared-score games. `rewards` is
    /// padded with zeros (or truncated) to one entry per player.
    /// No-op once the episode is over.
    pub fn set_outcome(&mut self, mut rewards: RewardVec, reason: impl Into<String>) {
        if self.is_over() {
            return;
        }
        rewards.resize(self.player_count(), 0.0);
        self.outcome = Some(Outcome {
            winners: self.all_players(),
            reason: reason.into(),
            rewards,
        });
        self.terminated = true;
    }

    /// Declare a standing tie-break for turn-limit truncation.
    ///
    /// Overwrites any earlier declaration; an empty slice clears it.
    /// Consumed only if the turn limit trips: the declared winners are
    /// then scored zero-sum instead of the default draw. Ignored by
    /// every other outcome path.
    pub fn set_tiebreak_winners(&mut self, winners: &[PlayerId]) {
        if winners.is_empty() {
            self.tiebreak = None;
        } else {
            let count = self.player_count();
            self.tiebreak = Some(
                winners
                    .iter()
                    .copied()
                    .filter(|p| p.index() < count)
                    .collect(),
            );
        }
    }

    // ── Simultaneous-round path ─────────────────────────────────

    /// Stage one player's action for the current round.
    ///
    /// Returns [`RoundPhase::Ready`] exactly when this was the last
    /// missing submission.
    ///
    /// # Errors
    ///
    /// [`StageError::EpisodeOver`] once the episode is over;
    /// [`StageError::UnknownPlayer`] for a submitter outside the
    /// player set.
    pub fn stage_action(
        &mut self,
        player: PlayerId,
        action: impl Into<String>,
    ) -> Result<RoundPhase, StageError> {
        if self.is_over() {
            return Err(StageError::EpisodeOver);
        }
        self.buffer.submit(player, action)
    }

    /// Whether every active player has staged an action this round.
    pub fn round_ready(&self) -> bool {
        self.buffer.is_ready()
    }

    /// Hand the completed round to the session for resolution.
    ///
    /// Clears the buffer for the next round and marks the round
    /// resolved, so the next [`step`](Episode::step) advances the turn
    /// counter once.
    pub fn take_round(&mut self) -> ActionBatch {
        let batch = self.buffer.drain_and_clear();
        if !batch.is_empty() {
            self.round_resolved = true;
        }
        batch
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The player whose turn it is.
    pub fn current_player_id(&self) -> PlayerId {
        self.clock.current_player()
    }

    /// The current turn index.
    pub fn turn(&self) -> TurnId {
        self.clock.turn()
    }

    /// The number of players in the episode.
    pub fn player_count(&self) -> usize {
        self.router.player_count()
    }

    /// Whether the episode has ended, by termination or truncation.
    pub fn is_over(&self) -> bool {
        self.terminated || self.truncated
    }

    /// The resolved outcome, once the episode is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Every invalid move recorded this episode, in occurrence order.
    pub fn invalid_moves(&self) -> &[InvalidMove] {
        self.tracker.records()
    }

    /// The permanent transcript of loggable messages.
    pub fn transcript(&self) -> &Transcript {
        self.router.transcript()
    }

    /// Return and clear everything queued for one player.
    pub fn drain(&mut self, player: PlayerId) -> Vec<Observation> {
        self.router.drain(player)
    }

    /// The game-defined state record.
    ///
    /// # Panics
    ///
    /// Panics if called before the first [`reset`](Episode::reset).
    pub fn game_state(&self) -> &G {
        self.game_state
            .as_ref()
            .expect("reset() must be called before game_state()")
    }

    /// Mutable access to the game-defined state record.
    ///
    /// # Panics
    ///
    /// Panics if called before the first [`reset`](Episode::reset).
    pub fn game_state_mut(&mut self) -> &mut G {
        self.game_state
            .as_mut()
            .expect("reset() must be called before game_state_mut()")
    }

    /// The episode-owned RNG, reseeded on every reset.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// The seed in effect since the last reset.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<G> fmt::Debug for Episode<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Episode")
            .field("player_count", &self.player_count())
            .field("turn", &self.clock.turn())
            .field("current_player", &self.clock.current_player())
            .field("terminated", &self.terminated)
            .field("truncated", &self.truncated)
            .field("seed", &self.seed)
            .finish()
    }
}

impl<G> Episode<G> {
    fn all_players(&self) -> SmallVec<[PlayerId; 4]> {
        (0..self.player_count() as u32).map(PlayerId).collect()
    }
}
