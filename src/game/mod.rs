//! Pitty Pat game engine - entities, dealing, and the turn FSM.
//!
//! This module provides the foundational game implementation:
//! - Card, player, and state entities
//! - Deck construction, shuffling, and dealing
//! - The pure turn engine: draw, play, end-turn, restart

pub mod constants;
pub mod deck;
pub mod engine;
pub mod entities;

pub use engine::{
    EngineError, GamePhase, GameState, SeatConfig, TurnAction, can_play, playable_cards,
};
