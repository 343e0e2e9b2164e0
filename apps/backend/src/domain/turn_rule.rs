//! The single built-in turn rule: every rank-15 Spades card leaves the deck.

use super::cards_types::{Card, Suit, MAX_RANK};
use super::deck::{Deck, RemovalPolicy};

pub const TURN_RULE_SUIT: Suit = Suit::Spades;
pub const TURN_RULE_RANK: u8 = MAX_RANK;

fn is_target(card: &Card) -> bool {
    card.suit() == TURN_RULE_SUIT && card.rank() == TURN_RULE_RANK
}

/// Apply the turn rule to `deck`, returning the cards it removed.
///
/// Targets are collected before any removal so the sequence is never
/// mutated while being walked.
pub fn play_turn(deck: &mut Deck, policy: RemovalPolicy) -> Vec<Card> {
    let targets: Vec<Card> = deck
        .cards(TURN_RULE_SUIT)
        .filter(|card| is_target(card))
        .copied()
        .collect();

    let mut removed = Vec::with_capacity(targets.len());
    for target in targets {
        let count = deck.remove_card(target, policy);
        removed.extend(std::iter::repeat_n(target, count));
    }
    removed
}
