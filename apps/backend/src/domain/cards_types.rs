//! Core card-related types: Card, Suit, DeckSlot

use crate::errors::domain::DomainError;

/// Lowest rank a card can carry.
pub const MIN_RANK: u8 = 1;
/// Highest rank a card can carry.
pub const MAX_RANK: u8 = 15;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clovers,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clovers, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Label used on the wire and as the deck map key.
    pub fn label(self) -> &'static str {
        match self {
            Suit::Clovers => "Clovers",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Build a card, rejecting ranks outside `MIN_RANK..=MAX_RANK`.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, DomainError> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(DomainError::validation(format!(
                "rank {rank} is outside {MIN_RANK}..={MAX_RANK}"
            )));
        }
        Ok(Self { rank, suit })
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Every card of one suit in ascending rank order.
    pub(crate) fn full_suit(suit: Suit) -> impl Iterator<Item = Card> {
        (MIN_RANK..=MAX_RANK).map(move |rank| Card { rank, suit })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// One position in a suit's sequence.
///
/// `Placeholder` is the zero card left behind when the legacy removal policy
/// neutralises an interior card instead of removing it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DeckSlot {
    Card(Card),
    Placeholder,
}

impl DeckSlot {
    pub fn card(&self) -> Option<&Card> {
        match self {
            DeckSlot::Card(card) => Some(card),
            DeckSlot::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DeckSlot::Placeholder)
    }

    /// Rank of the slot; placeholders report 0.
    pub fn rank(&self) -> u8 {
        self.card().map_or(0, Card::rank)
    }
}

impl From<Card> for DeckSlot {
    fn from(card: Card) -> Self {
        DeckSlot::Card(card)
    }
}
