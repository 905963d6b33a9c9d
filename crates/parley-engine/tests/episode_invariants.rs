//! Cross-component invariants of the episode orchestrator.

use proptest::prelude::*;

use parley_core::{PlayerId, Recipient, Sender, TurnId};
use parley_engine::{Episode, EpisodeConfig, InvalidMovePolicy, TurnStyle};

fn episode(players: usize, policy: InvalidMovePolicy, max_turns: Option<u64>) -> Episode<()> {
    let config = EpisodeConfig {
        max_turns,
        invalid_move_policy: policy,
        ..EpisodeConfig::new(players)
    };
    let mut episode = Episode::new(config).unwrap();
    episode.reset((), |p, _| format!("player {p} ready"), Some(99));
    episode
}

#[test]
fn broadcast_is_drained_exactly_once_per_player() {
    let mut ep = episode(3, InvalidMovePolicy::Terminate, None);
    ep.add_observation(Sender::System, Recipient::Broadcast, "round begins", true)
        .unwrap();
    for id in 0..3u32 {
        let drained = ep.drain(PlayerId(id));
        assert_eq!(drained.len(), 1, "player {id} should see the broadcast once");
        assert!(ep.drain(PlayerId(id)).is_empty());
    }
}

#[test]
fn truncation_happens_exactly_at_the_limit() {
    let max = 5;
    let mut ep = episode(2, InvalidMovePolicy::Terminate, Some(max));
    for expected_turn in 1..max {
        let step = ep.step();
        assert!(!step.is_over(), "episode ended early at turn {expected_turn}");
        assert_eq!(ep.turn(), TurnId(expected_turn));
    }
    let step = ep.step();
    assert!(step.truncated);
    assert!(!step.terminated);
    assert_eq!(ep.turn(), TurnId(max));
    assert_eq!(step.rewards.as_deref(), Some(&[0.0, 0.0][..]));
}

#[test]
fn terminated_episode_rejects_staged_actions() {
    let mut ep = episode(2, InvalidMovePolicy::Terminate, None);
    ep.set_winners(&[PlayerId(0)], "decisive");
    ep.step();
    assert!(ep.stage_action(PlayerId(1), "[late]").is_err());
}

#[test]
fn rewards_are_immutable_after_truncation() {
    let mut ep = episode(2, InvalidMovePolicy::Terminate, Some(1));
    let step = ep.step();
    assert!(step.truncated);
    ep.set_winners(&[PlayerId(0)], "after the fact");
    let echo = ep.step();
    assert_eq!(echo.rewards.as_deref(), Some(&[0.0, 0.0][..]));
    assert_eq!(echo.info.reason.as_deref(), Some("turn limit reached"));
}

proptest! {
    /// The turn index never decreases across any interleaving of valid
    /// turns, recoverable invalid moves, and observation traffic.
    #[test]
    fn turn_index_is_non_decreasing(
        players in 1usize..4,
        script in prop::collection::vec(0u8..3, 1..40),
    ) {
        let mut ep = episode(players, InvalidMovePolicy::Retry, None);
        let mut last = ep.turn();
        for op in script {
            match op {
                0 => {
                    let player = ep.current_player_id();
                    ep.set_invalid_move(&[(player, "retry")]);
                }
                1 => {
                    ep.add_observation(Sender::System, Recipient::Broadcast, "tick", false)
                        .unwrap();
                }
                _ => {}
            }
            let step = ep.step();
            prop_assert!(!step.terminated);
            prop_assert!(ep.turn() >= last);
            last = ep.turn();
        }
    }

    /// A sole winner is paid +1 and every other seat −1; with two
    /// players that makes every terminal reward vector sum to zero.
    #[test]
    fn sole_winner_rewards_are_unit_valued(
        players in 2usize..5,
        winner in 0u32..5,
        turns_before in 0u64..6,
    ) {
        prop_assume!((winner as usize) < players);
        let mut ep = episode(players, InvalidMovePolicy::Terminate, None);
        for _ in 0..turns_before {
            ep.step();
        }
        ep.set_winners(&[PlayerId(winner)], "proptest win");
        let step = ep.step();
        let rewards = step.rewards.expect("terminal step carries rewards");
        prop_assert_eq!(rewards.len(), players);
        for (seat, reward) in rewards.iter().enumerate() {
            let expected = if seat == winner as usize { 1.0 } else { -1.0 };
            prop_assert_eq!(*reward, expected);
        }
        if players == 2 {
            prop_assert_eq!(rewards.iter().sum::<f32>(), 0.0);
        }
    }

    /// One invalid move under the terminate policy always ends a
    /// two-player episode with −1 for the offender and +1 for the
    /// opponent, whoever offends and whenever.
    #[test]
    fn terminate_policy_is_immediate_and_zero_sum(turns_before in 0u64..6) {
        let mut ep = episode(2, InvalidMovePolicy::Terminate, None);
        for _ in 0..turns_before {
            ep.step();
        }
        let offender = ep.current_player_id();
        ep.set_invalid_move(&[(offender, "garbled")]);
        let step = ep.step();
        prop_assert!(step.terminated);
        let rewards = step.rewards.expect("terminal step carries rewards");
        prop_assert_eq!(rewards[offender.index()], -1.0);
        prop_assert_eq!(rewards.iter().sum::<f32>(), 0.0);
    }

    /// The simultaneous buffer is ready exactly when every player has
    /// submitted, and a resolved round advances the turn index by one.
    #[test]
    fn rounds_resolve_once_per_full_batch(players in 2usize..4, rounds in 1u64..5) {
        let config = EpisodeConfig {
            turn_style: TurnStyle::Simultaneous,
            ..EpisodeConfig::new(players)
        };
        let mut ep: Episode<()> = Episode::new(config).unwrap();
        ep.reset((), |_, _| String::new(), Some(1));
        for round in 0..rounds {
            for submitted in 0..players {
                let player = ep.current_player_id();
                ep.stage_action(player, "[go]").unwrap();
                let expect_ready = submitted + 1 == players;
                prop_assert_eq!(ep.round_ready(), expect_ready);
                if expect_ready {
                    let batch = ep.take_round();
                    prop_assert_eq!(batch.len(), players);
                }
                ep.step();
            }
            prop_assert_eq!(ep.turn(), TurnId(round + 1));
        }
    }
}
