//! Session aggregate: a game code, its players, its deck and its turn log.

use serde::Serialize;

use super::cards_types::Card;
use super::deck::{Deck, RemovalPolicy};
use super::turn_rule::play_turn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    #[serde(rename = "player_name")]
    pub name: String,
    #[serde(rename = "player_cards")]
    pub cards: Vec<String>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }
}

/// A turn that changed the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub turn_number: usize,
    pub removed_cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    #[serde(rename = "game_code")]
    pub code: String,
    #[serde(rename = "game_type")]
    pub game_type: String,
    #[serde(rename = "players_in_game")]
    pub players: Vec<Player>,
    #[serde(rename = "deck_cards")]
    pub deck: Deck,
    #[serde(rename = "game_turns")]
    pub turns: Vec<Turn>,
}

impl Game {
    /// A new session with no players and a freshly populated deck.
    pub fn new(code: impl Into<String>, game_type: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            game_type: game_type.into(),
            players: Vec::new(),
            deck: Deck::standard(),
            turns: Vec::new(),
        }
    }

    /// Append a player with an empty hand and return it.
    pub fn add_player(&mut self, name: impl Into<String>) -> Player {
        let player = Player::new(name);
        self.players.push(player.clone());
        player
    }

    /// Run the turn rule against this game's deck.
    ///
    /// A `Turn` is appended to the log only when something was removed, so
    /// repeated applications to an already stripped deck leave the game
    /// unchanged.
    pub fn advance_turn(&mut self, policy: RemovalPolicy) -> Option<&Turn> {
        let removed_cards = play_turn(&mut self.deck, policy);
        if removed_cards.is_empty() {
            return None;
        }
        let turn_number = self.turns.len() + 1;
        self.turns.push(Turn {
            turn_number,
            removed_cards,
        });
        self.turns.last()
    }
}
