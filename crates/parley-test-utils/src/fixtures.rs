//! Reusable fixture games.
//!
//! Three deliberately trivial games for exercising the orchestration
//! core — they are scaffolding, not rule engines:
//!
//! - [`ScriptedDuel`] — two players alternate; `[win]` ends the game,
//!   `[pass]` hands the turn over, anything unbracketed terminates the
//!   offender.
//! - [`CountdownPuzzle`] — one player counts a seeded value down to
//!   zero with `[down]`; malformed input is retried, not punished.
//! - [`SignalClash`] — two players commit `[red]` or `[blue]`
//!   simultaneously each round; the first split round goes to red.

use rand::Rng;

use parley_core::{Env, Observations, PlayerId, Recipient, Sender, Step};
use parley_engine::{check_format, Episode, EpisodeConfig, InvalidMovePolicy, TurnStyle};

/// The shared action grammar: one bracketed token, e.g. `[pass]`.
pub fn bracketed_token(action: &str) -> bool {
    action.len() >= 3 && action.starts_with('[') && action.ends_with(']')
}

// ── ScriptedDuel ───────────────────────────────────────────────────

/// Game state for [`ScriptedDuel`]: the tokens played so far.
#[derive(Clone, Debug, Default)]
pub struct DuelState {
    /// Every accepted token, in play order.
    pub moves: Vec<String>,
}

/// A two-player alternating game under the terminate-on-invalid policy.
///
/// `[win]` declares the acting player the winner; `[pass]` hands the
/// turn to the opponent; any other input is an invalid move and ends
/// the episode against the offender.
pub struct ScriptedDuel {
    episode: Episode<DuelState>,
}

impl ScriptedDuel {
    /// A duel with no turn limit.
    pub fn new() -> Self {
        Self::with_max_turns(None)
    }

    /// A duel truncating after `max_turns` turns.
    pub fn with_max_turns(max_turns: Option<u64>) -> Self {
        let config = EpisodeConfig {
            max_turns,
            invalid_move_policy: InvalidMovePolicy::Terminate,
            ..EpisodeConfig::new(2)
        };
        Self {
            episode: Episode::new(config).expect("two-player duel config is valid"),
        }
    }

    /// The underlying episode, for assertions.
    pub fn episode(&self) -> &Episode<DuelState> {
        &self.episode
    }

    /// Mutable access to the underlying episode, for assertions.
    pub fn episode_mut(&mut self) -> &mut Episode<DuelState> {
        &mut self.episode
    }
}

impl Default for ScriptedDuel {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for ScriptedDuel {
    fn reset(&mut self, seed: Option<u64>) -> Observations {
        self.episode.reset(
            DuelState::default(),
            |player, _state| {
                format!(
                    "You are player {player} in a duel. Play [win] to win \
                     or [pass] to hand the turn over."
                )
            },
            seed,
        )
    }

    fn step(&mut self, action: &str) -> Step {
        let player = self.episode.current_player_id();
        self.episode
            .add_observation(
                Sender::Player(player),
                Recipient::Player(player),
                action,
                true,
            )
            .expect("acting player is in range");

        if !check_format(action, bracketed_token) {
            self.episode.set_invalid_move(&[(
                player,
                "actions must be a single bracketed token like [pass]",
            )]);
        } else if action == "[win]" {
            self.episode
                .set_winners(&[player], format!("player {player} played the winning token"));
        } else {
            self.episode.game_state_mut().moves.push(action.to_string());
            self.episode
                .add_observation(
                    Sender::System,
                    Recipient::Broadcast,
                    format!("player {player} played {action}"),
                    false,
                )
                .expect("broadcast is always deliverable");
        }
        self.episode.step()
    }

    fn render(&self) -> String {
        self.episode.game_state().moves.join(" ")
    }

    fn terminal_render_keys(&self) -> Vec<String> {
        vec!["moves".to_string()]
    }
}

// ── CountdownPuzzle ────────────────────────────────────────────────

/// Game state for [`CountdownPuzzle`]: the remaining count.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountdownState {
    /// How many `[down]` moves remain until the puzzle is solved.
    pub remaining: u32,
}

/// A single-player puzzle under the retry policy.
///
/// The player counts a seeded starting value down to zero, one `[down]`
/// at a time. Malformed input re-prompts the same player without
/// ending the episode.
pub struct CountdownPuzzle {
    episode: Episode<CountdownState>,
}

impl CountdownPuzzle {
    /// A puzzle with no turn limit.
    pub fn new() -> Self {
        Self::with_max_turns(None)
    }

    /// A puzzle truncating after `max_turns` turns.
    pub fn with_max_turns(max_turns: Option<u64>) -> Self {
        let config = EpisodeConfig {
            max_turns,
            invalid_move_policy: InvalidMovePolicy::Retry,
            ..EpisodeConfig::new(1)
        };
        Self {
            episode: Episode::new(config).expect("single-player puzzle config is valid"),
        }
    }

    /// The underlying episode, for assertions.
    pub fn episode(&self) -> &Episode<CountdownState> {
        &self.episode
    }
}

impl Default for CountdownPuzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for CountdownPuzzle {
    fn reset(&mut self, seed: Option<u64>) -> Observations {
        let mut all = self.episode.reset(
            CountdownState::default(),
            |_, _| "Count down to zero by playing [down].".to_string(),
            seed,
        );
        // The starting count comes from the episode RNG, so equal seeds
        // give equal puzzles.
        let remaining = 3 + self.episode.rng_mut().next_u32() % 3;
        self.episode.game_state_mut().remaining = remaining;
        self.episode
            .add_observation(
                Sender::System,
                Recipient::Player(PlayerId(0)),
                format!("Starting count: {remaining}."),
                true,
            )
            .expect("player 0 exists");
        all.entry(PlayerId(0))
            .or_default()
            .extend(self.episode.drain(PlayerId(0)));
        all
    }

    fn step(&mut self, action: &str) -> Step {
        let player = self.episode.current_player_id();
        self.episode
            .add_observation(Sender::Player(player), Recipient::Broadcast, action, true)
            .expect("broadcast is always deliverable");

        if !check_format(action, |a| a == "[down]") {
            self.episode
                .set_invalid_move(&[(player, "respond with [down], nothing else")]);
        } else {
            let state = self.episode.game_state_mut();
            state.remaining = state.remaining.saturating_sub(1);
            if state.remaining == 0 {
                self.episode
                    .set_winners(&[player], "counted all the way down");
            } else {
                let remaining = state.remaining;
                self.episode
                    .add_observation(
                        Sender::System,
                        Recipient::Player(player),
                        format!("{remaining} to go."),
                        false,
                    )
                    .expect("acting player is in range");
            }
        }
        self.episode.step()
    }

    fn render(&self) -> String {
        format!("remaining: {}", self.episode.game_state().remaining)
    }
}

// ── SignalClash ────────────────────────────────────────────────────

/// Game state for [`SignalClash`]: each resolved round's pair of signals.
#[derive(Clone, Debug, Default)]
pub struct ClashState {
    /// One `(player 0 signal, player 1 signal)` pair per resolved round.
    pub rounds: Vec<(String, String)>,
}

/// A two-player simultaneous-move game.
///
/// Both players commit `[red]` or `[blue]` each round; the round
/// resolves once both are in. A tied round continues, the first split
/// round goes to whoever played `[red]`. Truncates at the round limit.
pub struct SignalClash {
    episode: Episode<ClashState>,
}

impl SignalClash {
    /// A clash truncating after `max_rounds` resolved rounds.
    pub fn new(max_rounds: Option<u64>) -> Self {
        let config = EpisodeConfig {
            max_turns: max_rounds,
            invalid_move_policy: InvalidMovePolicy::Retry,
            turn_style: TurnStyle::Simultaneous,
            ..EpisodeConfig::new(2)
        };
        Self {
            episode: Episode::new(config).expect("two-player clash config is valid"),
        }
    }

    /// The underlying episode, for assertions.
    pub fn episode(&self) -> &Episode<ClashState> {
        &self.episode
    }
}

impl Env for SignalClash {
    fn reset(&mut self, seed: Option<u64>) -> Observations {
        self.episode.reset(
            ClashState::default(),
            |player, _state| {
                format!("You are player {player}. Commit [red] or [blue] each round.")
            },
            seed,
        )
    }

    fn step(&mut self, action: &str) -> Step {
        let player = self.episode.current_player_id();
        self.episode
            .add_observation(
                Sender::Player(player),
                Recipient::Player(player),
                action,
                true,
            )
            .expect("acting player is in range");

        if action != "[red]" && action != "[blue]" {
            self.episode
                .set_invalid_move(&[(player, "commit either [red] or [blue]")]);
            return self.episode.step();
        }

        self.episode
            .stage_action(player, action)
            .expect("episode is live and the player is in range");
        if self.episode.round_ready() {
            let batch = self.episode.take_round();
            let first = batch[&PlayerId(0)].clone();
            let second = batch[&PlayerId(1)].clone();
            if first == second {
                self.episode
                    .add_observation(
                        Sender::System,
                        Recipient::Broadcast,
                        format!("both players committed {first}; the round is tied"),
                        true,
                    )
                    .expect("broadcast is always deliverable");
                self.episode
                    .game_state_mut()
                    .rounds
                    .push((first, second));
            } else {
                let winner = if first == "[red]" {
                    PlayerId(0)
                } else {
                    PlayerId(1)
                };
                self.episode.game_state_mut().rounds.push((first, second));
                self.episode
                    .set_winners(&[winner], format!("player {winner} played red on a split round"));
            }
        }
        self.episode.step()
    }

    fn render(&self) -> String {
        self.episode
            .game_state()
            .rounds
            .iter()
            .map(|(a, b)| format!("{a}/{b}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
