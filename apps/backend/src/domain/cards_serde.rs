//! Serialization for card types.
//!
//! Cards travel as `{"card_rank": 7, "card_suit": "Spades"}`. Placeholder
//! slots travel as the zero card `{"card_rank": 0, "card_suit": ""}`.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::cards_types::{Card, DeckSlot, Suit};

// Suit
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

fn serialize_card_fields<S>(serializer: S, rank: u8, suit: &str) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = serializer.serialize_struct("Card", 2)?;
    state.serialize_field("card_rank", &rank)?;
    state.serialize_field("card_suit", suit)?;
    state.end()
}

// Card
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_card_fields(serializer, self.rank(), self.suit().label())
    }
}

// DeckSlot
impl Serialize for DeckSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DeckSlot::Card(card) => card.serialize(serializer),
            DeckSlot::Placeholder => serialize_card_fields(serializer, 0, ""),
        }
    }
}
