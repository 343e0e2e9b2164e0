//! Domain layer: pure card, deck and session types.

pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod game;
pub mod turn_rule;

#[cfg(test)]
mod tests_deck;

// Re-exports for ergonomics
pub use cards_types::{Card, DeckSlot, Suit};
pub use deck::{Deck, RemovalPolicy};
pub use game::{Game, Player, Turn};
pub use turn_rule::play_turn;
