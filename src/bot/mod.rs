//! Computer player with difficulty-based card selection.
//!
//! The computer is just another caller of the turn engine: [`decide`]
//! inspects a state and picks an action, and applying that action goes
//! through the same `play`/`draw` operations a human-driven interaction
//! would use. Scheduling (a "thinking" delay before the move) is the
//! driver's concern, not this module's.
//!
//! ## Difficulty levels
//!
//! - **Easy**: plays the first matching card in hand order (deterministic)
//! - **Medium**: plays a uniformly random matching card
//! - **Hard**: prefers to shed a card whose rank is duplicated in hand,
//!   keeping unique ranks for flexibility; otherwise uniform over the
//!   matching cards

pub mod decision;
pub mod models;

pub use decision::{decide, take_turn};
pub use models::{Decision, Difficulty, Situation, personality_message};
