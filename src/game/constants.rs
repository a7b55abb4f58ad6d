//! Fixed game parameters.

/// Number of cards in a single standard deck.
pub const DECK_SIZE: usize = 52;

/// Pitty Pat is a two-player game in this implementation.
pub const PLAYER_COUNT: usize = 2;

/// Classic Pitty Pat hand size.
pub const DEFAULT_HAND_SIZE: usize = 5;

pub const DEFAULT_HUMAN_NAME: &str = "Player";
pub const DEFAULT_COMPUTER_NAME: &str = "Computer";
