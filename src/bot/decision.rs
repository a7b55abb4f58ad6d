//! Computer-player decision making.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;

use super::models::{Decision, Difficulty};
use crate::game::engine::{EngineError, GamePhase, GameState, playable_cards};
use crate::game::entities::{Card, Rank};

/// Pick the computer's next action for the current state.
///
/// Precondition: it must be the computer's turn in an active round; anything
/// else is a driver bug and comes back as an error. The decision itself has
/// no side effects and never selects an illegal card.
pub fn decide<R: Rng + ?Sized>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Decision, EngineError> {
    if state.phase != GamePhase::Playing {
        return Err(EngineError::RoundNotActive);
    }
    let player = state.current_player();
    if !player.is_computer {
        return Err(EngineError::NotComputerTurn);
    }
    let top = state.top_discard().ok_or(EngineError::RoundNotActive)?;

    let playable = playable_cards(&player.hand, top);
    if playable.is_empty() {
        return Ok(Decision::Draw);
    }

    let card = match difficulty {
        Difficulty::Easy => playable[0],
        Difficulty::Medium => choose(&playable, rng),
        Difficulty::Hard => shed_duplicates(&playable, &player.hand, rng),
    };
    debug!("computer ({difficulty}) plays {card}");
    Ok(Decision::Play(card.id()))
}

/// Run one full computer turn: decide, apply through the engine, and end the
/// turn if the round is still going. Any thinking delay belongs to the
/// driver, outside this call.
pub fn take_turn<R: Rng + ?Sized>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<GameState, EngineError> {
    let next = match decide(state, difficulty, rng)? {
        Decision::Play(card_id) => state.play(card_id),
        Decision::Draw => state.draw(rng),
    };
    if next.phase == GamePhase::Playing {
        Ok(next.end_turn())
    } else {
        Ok(next)
    }
}

fn choose<'a, R: Rng + ?Sized>(playable: &[&'a Card], rng: &mut R) -> &'a Card {
    playable.choose(rng).copied().unwrap_or(playable[0])
}

/// Hard strategy: prefer shedding a playable card whose rank is duplicated
/// in hand, keeping unique ranks around for flexibility. Falls back to a
/// uniform pick over all playable cards.
fn shed_duplicates<'a, R: Rng + ?Sized>(
    playable: &[&'a Card],
    hand: &[Card],
    rng: &mut R,
) -> &'a Card {
    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in hand {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let duplicated: Vec<&Card> = playable
        .iter()
        .copied()
        .filter(|card| rank_counts.get(&card.rank).copied().unwrap_or(0) > 1)
        .collect();
    if duplicated.is_empty() {
        choose(playable, rng)
    } else {
        choose(&duplicated, rng)
    }
}
