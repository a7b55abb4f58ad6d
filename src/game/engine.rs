//! The turn engine: a pure FSM over `GamePhase`.
//!
//! Every operation takes a state by reference and returns the next state
//! wholesale; nothing is mutated in place. Malformed input (an unknown card
//! id, a card that does not match the top discard) degrades to a no-op or a
//! message-only rejection, never a fault: the driver is expected to offer
//! only legal choices and the rejection paths exist as a defensive fallback.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

use super::constants::{DEFAULT_COMPUTER_NAME, DEFAULT_HAND_SIZE, DEFAULT_HUMAN_NAME};
use super::deck;
use super::entities::{Card, CardId, Player, PlayerId};

/// Errors for caller-contract violations. In-game rejections (playing a
/// non-matching card) are not errors; they come back as message-only states.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum EngineError {
    #[error("need {needed} cards to deal, only {available} available")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("current player is not computer-controlled")]
    NotComputerTurn,
    #[error("no round in progress")]
    RoundNotActive,
}

/// Round lifecycle phases.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GamePhase {
    /// Placeholder state before the first deal.
    Waiting,
    Playing,
    RoundEnd,
    /// Reserved for a multi-round match win condition; never produced.
    GameEnd,
}

/// Advisory hint for the driver about what the current player is expected to
/// do next. It never constrains which operations may be attempted.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TurnAction {
    Draw,
    Play,
    Waiting,
}

/// One seat at the table, used to construct a round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SeatConfig {
    pub name: String,
    pub is_computer: bool,
}

/// The central aggregate. Owned by the turn engine and replaced wholesale on
/// every transition.
///
/// Invariants, once a round has started:
/// - `deck.len() + discard_pile.len() + Σ hand.len() == 52`
/// - no card id appears twice across deck, discards, and hands
/// - the discard pile is never empty while `Playing`
/// - `winner` is set iff `phase == RoundEnd`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameState {
    /// Draw pile; the next draw comes from the front.
    pub deck: VecDeque<Card>,
    /// Most-recently-played card at the end; only the top matters.
    pub discard_pile: Vec<Card>,
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub phase: GamePhase,
    pub winner: Option<PlayerId>,
    pub turn_action: TurnAction,
    /// Hand size this round was dealt with; reused on restart.
    pub hand_size: usize,
    /// Human-readable narration of the last transition. Advisory only,
    /// never consulted by rule logic.
    pub message: String,
}

/// The single rule of the game: a card is playable iff its rank matches the
/// top discard's rank. Suit is never compared.
pub fn can_play(card: &Card, top_discard: &Card) -> bool {
    card.rank == top_discard.rank
}

/// All cards in `hand` playable against `top_discard`, in hand order.
pub fn playable_cards<'a>(hand: &'a [Card], top_discard: &Card) -> Vec<&'a Card> {
    hand.iter().filter(|card| can_play(card, top_discard)).collect()
}

impl GameState {
    /// Build, shuffle, and deal a fresh round. The first seat acts first and
    /// is prompted to draw.
    pub fn new_round<R: Rng + ?Sized>(
        seats: &[SeatConfig],
        hand_size: usize,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut cards = deck::standard_deck();
        deck::shuffle(&mut cards, rng);
        let dealt = deck::deal(cards, seats.len(), hand_size)?;
        let players = seats
            .iter()
            .zip(dealt.hands)
            .enumerate()
            .map(|(index, (seat, hand))| Player {
                id: PlayerId(index),
                name: seat.name.clone(),
                hand,
                is_computer: seat.is_computer,
                wins: 0,
            })
            .collect();
        Ok(Self {
            deck: dealt.draw_pile,
            discard_pile: dealt.discard_pile,
            players,
            current_player_index: 0,
            phase: GamePhase::Playing,
            winner: None,
            turn_action: TurnAction::Draw,
            hand_size,
            message: "Game started! Your turn.".to_string(),
        })
    }

    /// The standard setup: a human against the computer, five cards each.
    pub fn default_round<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, EngineError> {
        let seats = [
            SeatConfig {
                name: DEFAULT_HUMAN_NAME.to_string(),
                is_computer: false,
            },
            SeatConfig {
                name: DEFAULT_COMPUTER_NAME.to_string(),
                is_computer: true,
            },
        ];
        Self::new_round(&seats, DEFAULT_HAND_SIZE, rng)
    }

    /// A stable uninitialized state for drivers that need something to show
    /// before the first deal. The only state in which the discard pile may
    /// be empty.
    pub fn placeholder() -> Self {
        let players = vec![
            Player {
                id: PlayerId(0),
                name: DEFAULT_HUMAN_NAME.to_string(),
                hand: Vec::new(),
                is_computer: false,
                wins: 0,
            },
            Player {
                id: PlayerId(1),
                name: DEFAULT_COMPUTER_NAME.to_string(),
                hand: Vec::new(),
                is_computer: true,
                wins: 0,
            },
        ];
        Self {
            deck: VecDeque::new(),
            discard_pile: Vec::new(),
            players,
            current_player_index: 0,
            phase: GamePhase::Waiting,
            winner: None,
            turn_action: TurnAction::Waiting,
            hand_size: DEFAULT_HAND_SIZE,
            message: "Loading game...".to_string(),
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Draw the front card of the deck onto the discard pile.
    ///
    /// The drawn card always lands on the discard pile, whether or not it
    /// matches the prior top; a match is only narrated differently. Drawing
    /// consumes the player's action for the turn.
    ///
    /// If the deck is empty, the discard pile (minus its top card) is
    /// recycled into a new face-down draw pile and no card is drawn this
    /// call. If there is nothing to recycle either, the state comes back
    /// unchanged; that degenerate outcome is a no-op, not an error.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        if self.phase != GamePhase::Playing {
            return self.clone();
        }
        let mut next = self.clone();

        if next.deck.is_empty() {
            let Some((draw_pile, discard_pile)) = deck::recycle(&next.discard_pile, rng) else {
                return next;
            };
            debug!("recycled {} discards into a new draw pile", draw_pile.len());
            next.deck = draw_pile;
            next.discard_pile = discard_pile;
            return next;
        }

        let Some(card) = next.deck.pop_front() else {
            return next;
        };
        let card = card.turned_up();
        let name = next.current_player().name.clone();
        let matched = next.top_discard().is_some_and(|top| can_play(&card, top));
        next.message = if matched {
            format!("{name} drew and played a {}!", card.rank)
        } else {
            format!("{name} drew and discarded a {}", card.rank)
        };
        next.discard_pile.push(card);
        next.turn_action = TurnAction::Waiting;
        debug!("{name} drew {card}; {} cards left in the deck", next.deck.len());
        next
    }

    /// Play a card from the current player's hand onto the discard pile.
    ///
    /// An unknown card id is a pure no-op; a rank mismatch is reported via
    /// `message` with no card movement. A play that empties the hand ends
    /// the round and credits the win.
    pub fn play(&self, card_id: CardId) -> Self {
        if self.phase != GamePhase::Playing {
            return self.clone();
        }
        let mut next = self.clone();
        let index = next.current_player_index;

        let Some(position) = next.players[index].hand.iter().position(|c| c.id() == card_id)
        else {
            return next;
        };
        let card = next.players[index].hand[position];

        let Some(&top) = next.top_discard() else {
            return next;
        };
        if !can_play(&card, &top) {
            next.message = "That card doesn't match the rank!".to_string();
            return next;
        }

        next.players[index].hand.remove(position);
        next.discard_pile.push(card);
        debug!("{} played {card}", next.players[index].name);

        if next.players[index].hand.is_empty() {
            next.players[index].wins += 1;
            let winner = &next.players[index];
            next.winner = Some(winner.id);
            next.message = format!("{} wins the round!", winner.name);
            next.phase = GamePhase::RoundEnd;
        } else {
            next.message = format!("{} played a {}", next.players[index].name, card.rank);
            next.turn_action = TurnAction::Waiting;
        }
        next
    }

    /// Advance to the next player. Humans are prompted to draw; the computer
    /// is driven by its own decision procedure instead.
    pub fn end_turn(&self) -> Self {
        if self.phase != GamePhase::Playing {
            return self.clone();
        }
        let mut next = self.clone();
        next.current_player_index = (next.current_player_index + 1) % next.players.len();
        let up_next = &next.players[next.current_player_index];
        next.turn_action = if up_next.is_computer {
            TurnAction::Waiting
        } else {
            TurnAction::Draw
        };
        next.message = format!("{}'s turn", up_next.name);
        next
    }

    /// Start a new round with the same roster: fresh deck, hands, and
    /// discard pile, win counters retained.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, EngineError> {
        let mut cards = deck::standard_deck();
        deck::shuffle(&mut cards, rng);
        let dealt = deck::deal(cards, self.players.len(), self.hand_size)?;
        let players = self
            .players
            .iter()
            .cloned()
            .zip(dealt.hands)
            .map(|(player, hand)| Player { hand, ..player })
            .collect();
        Ok(Self {
            deck: dealt.draw_pile,
            discard_pile: dealt.discard_pile,
            players,
            current_player_index: 0,
            phase: GamePhase::Playing,
            winner: None,
            turn_action: TurnAction::Draw,
            hand_size: self.hand_size,
            message: "New round! Your turn.".to_string(),
        })
    }
}
