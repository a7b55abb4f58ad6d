//! # Pitty Pat
//!
//! A two-player Pitty Pat card game engine built as a pure finite state
//! machine (FSM).
//!
//! This library provides the complete rules of Pitty Pat: deck construction
//! and dealing, turn sequencing, win detection, empty-deck recycling, and a
//! computer opponent with three difficulty levels. Every operation is a pure
//! function from one [`GameState`] to the next; the state is replaced
//! wholesale on each transition and never mutated in place.
//!
//! ## Architecture
//!
//! A round moves through three phases:
//!
//! - **Waiting**: placeholder state before any cards are dealt
//! - **Playing**: players alternate drawing and playing cards
//! - **RoundEnd**: a player emptied their hand; win counters updated
//!
//! The single rule of the game: a card may be played iff its rank matches
//! the rank of the top card on the discard pile. Suits never matter.
//!
//! Drivers (a UI, CLI, or test harness) call the engine's operations in
//! response to user input or a scheduled computer move; the computer player
//! in [`bot`] is just another caller of the same operations with its own
//! card-selection policy.
//!
//! ## Core Modules
//!
//! - [`game`]: entities, deck handling, and the turn engine FSM
//! - [`bot`]: computer-player decision making and difficulty presets
//!
//! ## Example
//!
//! ```
//! use pitty_pat::GameState;
//!
//! let mut rng = rand::rng();
//! let state = GameState::default_round(&mut rng).unwrap();
//! assert_eq!(state.deck.len(), 41);
//! assert_eq!(state.discard_pile.len(), 1);
//! ```

/// Computer-player decision making.
pub mod bot;
pub use bot::{Decision, Difficulty, decide, take_turn};

/// Core game logic, entities, and the turn engine.
pub mod game;
pub use game::{
    EngineError, GamePhase, GameState, SeatConfig, TurnAction, can_play,
    constants::{self, DECK_SIZE, DEFAULT_HAND_SIZE},
    deck,
    entities::{Card, CardId, Player, PlayerId, Rank, Suit},
    playable_cards,
};
