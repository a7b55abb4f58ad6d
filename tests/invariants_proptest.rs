//! Property-based tests for the engine's reachable-state invariants.
//!
//! Random operation sequences are thrown at a freshly dealt round; no
//! sequence of engine calls, legal or not, may ever create or destroy a
//! card, duplicate an id, or set a winner outside `RoundEnd`.

use pitty_pat::{
    CardId, Difficulty, GamePhase, GameState, Rank, Suit, can_play, take_turn,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Driver calls, including deliberately illegal ones.
#[derive(Clone, Debug)]
enum Op {
    Draw,
    EndTurn,
    /// Play an arbitrary card id (0..52), whether or not it is held.
    Play(u8),
    /// Full computer turn; ignored when it is not the computer's turn.
    BotTurn,
    Restart,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Draw),
        Just(Op::EndTurn),
        (0u8..52).prop_map(Op::Play),
        Just(Op::BotTurn),
        Just(Op::Restart),
    ]
}

fn check_invariants(state: &GameState) {
    let total = state.deck.len()
        + state.discard_pile.len()
        + state.players.iter().map(|p| p.hand.len()).sum::<usize>();
    assert_eq!(total, 52, "card conservation violated");

    let mut ids = HashSet::new();
    let all = state
        .deck
        .iter()
        .chain(state.discard_pile.iter())
        .chain(state.players.iter().flat_map(|p| p.hand.iter()));
    for card in all {
        assert!(ids.insert(card.id()), "duplicate card id {:?}", card.id());
    }

    assert!(state.current_player_index < state.players.len());
    assert_eq!(state.winner.is_some(), state.phase == GamePhase::RoundEnd);
    if state.phase == GamePhase::Playing {
        assert!(!state.discard_pile.is_empty());
    }
}

proptest! {
    #[test]
    fn invariants_hold_under_arbitrary_operation_sequences(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 1..120),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::default_round(&mut rng).unwrap();
        check_invariants(&state);

        for op in ops {
            state = match op {
                Op::Draw => state.draw(&mut rng),
                Op::EndTurn => state.end_turn(),
                Op::Play(raw) => state.play(CardId(raw)),
                Op::BotTurn => take_turn(&state, Difficulty::Hard, &mut rng)
                    .unwrap_or_else(|_| state.clone()),
                Op::Restart => state.restart(&mut rng).unwrap(),
            };
            check_invariants(&state);
        }
    }

    #[test]
    fn can_play_is_rank_equality_regardless_of_suit(
        rank_a in 0usize..13,
        suit_a in 0usize..4,
        rank_b in 0usize..13,
        suit_b in 0usize..4,
    ) {
        let a = pitty_pat::Card::new(Rank::ORDERED[rank_a], Suit::ALL[suit_a]);
        let b = pitty_pat::Card::new(Rank::ORDERED[rank_b], Suit::ALL[suit_b]);
        prop_assert_eq!(can_play(&a, &b), rank_a == rank_b);
    }

    #[test]
    fn shuffled_deals_always_have_the_dealt_structure(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::default_round(&mut rng).unwrap();
        prop_assert_eq!(state.deck.len(), 41);
        prop_assert_eq!(state.discard_pile.len(), 1);
        prop_assert!(state.players.iter().all(|p| p.hand.len() == 5));
    }
}
