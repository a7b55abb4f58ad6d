//! Computer-player models: difficulty presets, decisions, and flavor text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::entities::CardId;

/// Computer-player difficulty.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{repr}")
    }
}

/// What the computer decided to do. Applying it is the caller's job, via the
/// engine's `play`/`draw` operations.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Decision {
    Play(CardId),
    Draw,
}

/// Situations the driver may want flavor text for.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Situation {
    Win,
    Lose,
    Play,
    Draw,
}

/// Personality flavor text per difficulty. Purely cosmetic; drivers show it
/// alongside the computer's moves.
pub fn personality_message(difficulty: Difficulty, situation: Situation) -> &'static str {
    match (difficulty, situation) {
        (Difficulty::Easy, Situation::Win) => "Lucky me!",
        (Difficulty::Easy, Situation::Lose) => "Good game!",
        (Difficulty::Easy, Situation::Play) => "I'll play this one!",
        (Difficulty::Easy, Situation::Draw) => "Let me draw a card...",
        (Difficulty::Medium, Situation::Win) => "Great match!",
        (Difficulty::Medium, Situation::Lose) => "Well played!",
        (Difficulty::Medium, Situation::Play) => "Here's my move.",
        (Difficulty::Medium, Situation::Draw) => "Drawing...",
        (Difficulty::Hard, Situation::Win) => "Calculated victory.",
        (Difficulty::Hard, Situation::Lose) => "You played well.",
        (Difficulty::Hard, Situation::Play) => "Strategic play.",
        (Difficulty::Hard, Situation::Draw) => "Interesting...",
    }
}
