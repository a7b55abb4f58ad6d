//! Deck construction, shuffling, and dealing.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

use super::constants::DECK_SIZE;
use super::engine::EngineError;
use super::entities::{Card, Rank, Suit};

/// Build the standard 52-card deck, face-down, one card per (rank, suit)
/// pair. Deterministic: no randomness, stable ids.
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ORDERED {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Uniform Fisher-Yates shuffle with an injectable random source.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Result of dealing a round: one hand per player, the face-up starter on
/// the discard pile, and the remaining draw pile.
#[derive(Clone, Debug)]
pub struct DealOutcome {
    pub hands: Vec<Vec<Card>>,
    pub draw_pile: VecDeque<Card>,
    pub discard_pile: Vec<Card>,
}

/// Deal `player_count` hands of `hand_size` cards in deck order, then turn
/// one more card face-up to start the discard pile. Hands are dealt face-up
/// since they are visible to their owner.
pub fn deal(cards: Vec<Card>, player_count: usize, hand_size: usize) -> Result<DealOutcome, EngineError> {
    let needed = player_count * hand_size + 1;
    if cards.len() < needed {
        return Err(EngineError::NotEnoughCards {
            needed,
            available: cards.len(),
        });
    }

    let mut draw_pile: VecDeque<Card> = cards.into();
    let mut hands = Vec::with_capacity(player_count);
    for _ in 0..player_count {
        let hand: Vec<Card> = draw_pile.drain(..hand_size).map(Card::turned_up).collect();
        hands.push(hand);
    }

    let starter = draw_pile
        .pop_front()
        .ok_or(EngineError::NotEnoughCards { needed, available: 0 })?
        .turned_up();

    Ok(DealOutcome {
        hands,
        draw_pile,
        discard_pile: vec![starter],
    })
}

/// Recycle an exhausted draw pile: shuffle every discard except the current
/// top back into a face-down draw pile, leaving the top as the whole discard
/// pile. Returns `None` when fewer than two discards exist; the caller treats
/// that as a no-op, not an error.
pub fn recycle<R: Rng + ?Sized>(
    discard_pile: &[Card],
    rng: &mut R,
) -> Option<(VecDeque<Card>, Vec<Card>)> {
    let (&top, rest) = discard_pile.split_last()?;
    if rest.is_empty() {
        return None;
    }
    let mut fresh: Vec<Card> = rest.iter().copied().map(Card::turned_down).collect();
    shuffle(&mut fresh, rng);
    Some((fresh.into(), vec![top]))
}
