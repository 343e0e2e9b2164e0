use crate::domain::{Card, Deck, DeckSlot, RemovalPolicy, Suit};

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).unwrap()
}

fn ranks(deck: &Deck, suit: Suit) -> Vec<u8> {
    deck.slots(suit).iter().map(DeckSlot::rank).collect()
}

#[test]
fn populate_builds_fifteen_ascending_cards_per_suit() {
    let deck = Deck::standard();

    for suit in Suit::ALL {
        let cards: Vec<&Card> = deck.cards(suit).collect();
        assert_eq!(cards.len(), 15, "{suit} should hold 15 cards");
        assert!(cards.iter().all(|c| c.suit() == suit));
        assert_eq!(ranks(&deck, suit), (1..=15).collect::<Vec<u8>>());
    }
    assert_eq!(deck.card_count(), 60);
}

#[test]
fn populate_twice_appends_duplicates() {
    let mut deck = Deck::standard();
    deck.populate();

    assert_eq!(deck.card_count(), 120);
    let hearts = ranks(&deck, Suit::Hearts);
    assert_eq!(&hearts[..15], &hearts[15..]);
}

#[test]
fn empty_deck_has_no_slots() {
    let deck = Deck::new();
    assert_eq!(deck.card_count(), 0);
    assert!(deck.slots(Suit::Spades).is_empty());
}

#[test]
fn remove_first_card_drops_it_under_both_policies() {
    for policy in [RemovalPolicy::Filter, RemovalPolicy::Legacy] {
        let mut deck = Deck::standard();
        let matched = deck.remove_card(card(1, Suit::Hearts), policy);

        assert_eq!(matched, 1);
        assert_eq!(ranks(&deck, Suit::Hearts), (2..=15).collect::<Vec<u8>>());
        assert_eq!(deck.slots(Suit::Hearts)[0].rank(), 2, "{policy:?}");
    }
}

#[test]
fn remove_last_card_truncates_under_both_policies() {
    for policy in [RemovalPolicy::Filter, RemovalPolicy::Legacy] {
        let mut deck = Deck::standard();
        deck.remove_card(card(15, Suit::Diamonds), policy);

        assert_eq!(ranks(&deck, Suit::Diamonds), (1..=14).collect::<Vec<u8>>());
    }
}

#[test]
fn legacy_interior_removal_leaves_placeholder() {
    let mut deck = Deck::standard();
    deck.remove_card(card(8, Suit::Clovers), RemovalPolicy::Legacy);

    let slots = deck.slots(Suit::Clovers);
    assert_eq!(slots.len(), 15);
    assert_eq!(slots[7], DeckSlot::Placeholder);
    assert_eq!(deck.cards(Suit::Clovers).count(), 14);
    assert!(!deck.contains(card(8, Suit::Clovers)));
}

#[test]
fn filter_interior_removal_shrinks_sequence() {
    let mut deck = Deck::standard();
    deck.remove_card(card(8, Suit::Clovers), RemovalPolicy::Filter);

    let expected: Vec<u8> = (1..=15).filter(|r| *r != 8).collect();
    assert_eq!(ranks(&deck, Suit::Clovers), expected);
    assert!(deck.slots(Suit::Clovers).iter().all(|s| !s.is_placeholder()));
}

#[test]
fn removal_only_touches_the_cards_suit() {
    let mut deck = Deck::standard();
    deck.remove_card(card(5, Suit::Spades), RemovalPolicy::Filter);

    for suit in [Suit::Clovers, Suit::Diamonds, Suit::Hearts] {
        assert!(deck.contains(card(5, suit)));
    }
    assert_eq!(deck.card_count(), 59);
}

#[test]
fn removing_a_missing_card_is_a_no_op() {
    let mut deck = Deck::standard();
    deck.remove_card(card(3, Suit::Hearts), RemovalPolicy::Filter);
    let before = deck.clone();

    assert_eq!(deck.remove_card(card(3, Suit::Hearts), RemovalPolicy::Legacy), 0);
    assert_eq!(deck, before);
    assert_eq!(Deck::new().remove_card(card(3, Suit::Hearts), RemovalPolicy::Filter), 0);
}

#[test]
fn legacy_removal_of_duplicates_classifies_each_position() {
    // After a double populate rank 1 sits at index 0 and index 15.
    let mut deck = Deck::standard();
    deck.populate();

    let matched = deck.remove_card(card(1, Suit::Hearts), RemovalPolicy::Legacy);

    assert_eq!(matched, 2);
    let slots = deck.slots(Suit::Hearts);
    assert_eq!(slots.len(), 29);
    assert_eq!(slots[0].rank(), 2);
    assert_eq!(slots[14], DeckSlot::Placeholder);
}

#[test]
fn removal_policy_parses_case_insensitively() {
    assert_eq!("filter".parse::<RemovalPolicy>().unwrap(), RemovalPolicy::Filter);
    assert_eq!(" Legacy ".parse::<RemovalPolicy>().unwrap(), RemovalPolicy::Legacy);
    assert!("strict".parse::<RemovalPolicy>().is_err());
}

#[test]
fn deck_serializes_as_suit_keyed_map() {
    let mut deck = Deck::standard();
    deck.remove_card(card(8, Suit::Spades), RemovalPolicy::Legacy);

    let json = serde_json::to_value(&deck).unwrap();
    let map = json.as_object().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Clovers", "Diamonds", "Hearts", "Spades"]);
    assert_eq!(json["Spades"][7], serde_json::json!({"card_rank": 0, "card_suit": ""}));
    assert_eq!(json["Hearts"][0], serde_json::json!({"card_rank": 1, "card_suit": "Hearts"}));
}
