//! Suited deck: population and removal.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::cards_types::{Card, DeckSlot, Suit};
use crate::errors::domain::DomainError;

/// How `Deck::remove_card` treats matching cards.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RemovalPolicy {
    /// Drop every matching card; the sequence shrinks and stays gap-free.
    #[default]
    Filter,
    /// Positional behaviour kept for compatibility with older clients:
    /// a match at the first or last index is dropped, an interior match is
    /// overwritten with a placeholder.
    Legacy,
}

impl FromStr for RemovalPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(RemovalPolicy::Filter),
            "legacy" => Ok(RemovalPolicy::Legacy),
            other => Err(DomainError::validation(format!(
                "unknown removal policy '{other}' (expected 'filter' or 'legacy')"
            ))),
        }
    }
}

/// A deck partitioned by suit. Serializes as a map of suit label to slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: BTreeMap<Suit, Vec<DeckSlot>>,
}

impl Deck {
    /// An empty deck with no suits.
    pub fn new() -> Self {
        Self::default()
    }

    /// A freshly populated deck: four suits of fifteen cards each.
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.populate();
        deck
    }

    /// Append ranks 1..=15 to each suit in ascending order.
    ///
    /// Not idempotent: populating twice yields duplicates.
    pub fn populate(&mut self) {
        for suit in Suit::ALL {
            self.cards
                .entry(suit)
                .or_default()
                .extend(Card::full_suit(suit).map(DeckSlot::from));
        }
    }

    /// Remove every card in `card`'s suit with the same rank.
    ///
    /// Returns the number of matching slots. Match positions are taken from
    /// the sequence as it was before the call.
    pub fn remove_card(&mut self, card: Card, policy: RemovalPolicy) -> usize {
        let Some(slots) = self.cards.get_mut(&card.suit()) else {
            return 0;
        };

        let is_match = |slot: &DeckSlot| slot.card().is_some_and(|c| c.rank() == card.rank());
        let matched = slots.iter().filter(|slot| is_match(*slot)).count();
        if matched == 0 {
            return 0;
        }

        let last = slots.len() - 1;
        let kept: Vec<DeckSlot> = match policy {
            RemovalPolicy::Filter => slots
                .iter()
                .filter(|slot| !is_match(*slot))
                .copied()
                .collect(),
            RemovalPolicy::Legacy => slots
                .iter()
                .enumerate()
                .filter_map(|(idx, slot)| match (is_match(slot), idx) {
                    (false, _) => Some(*slot),
                    (true, 0) => None,
                    (true, idx) if idx == last => None,
                    (true, _) => Some(DeckSlot::Placeholder),
                })
                .collect(),
        };

        debug!(
            card = %card,
            ?policy,
            matched,
            before = slots.len(),
            after = kept.len(),
            "removed card from deck"
        );
        *slots = kept;
        matched
    }

    /// Slots of one suit, placeholders included.
    pub fn slots(&self, suit: Suit) -> &[DeckSlot] {
        self.cards.get(&suit).map_or(&[], Vec::as_slice)
    }

    /// Real cards of one suit, placeholders skipped.
    pub fn cards(&self, suit: Suit) -> impl Iterator<Item = &Card> + '_ {
        self.slots(suit).iter().filter_map(DeckSlot::card)
    }

    /// Total real cards across all suits.
    pub fn card_count(&self) -> usize {
        Suit::ALL.iter().map(|&suit| self.cards(suit).count()).sum()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards(card.suit()).any(|c| *c == card)
    }
}
