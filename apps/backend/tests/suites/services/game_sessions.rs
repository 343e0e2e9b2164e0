use std::thread;

use crabbie::config::GameSettings;
use crabbie::domain::{Card, DeckSlot, RemovalPolicy, Suit};
use crabbie::errors::domain::{ConflictKind, DomainError};
use crabbie::infra::state::build_state;
use crabbie::services::games::{GameService, MAX_CODE_ATTEMPTS};

fn spades_15() -> Card {
    Card::new(15, Suit::Spades).unwrap()
}

#[test]
fn create_registers_game_under_generated_code() {
    let state = build_state().build();
    let service = GameService::new();

    let created = service.create_game(&state).unwrap();

    assert_eq!(created.code.len(), 4);
    assert_eq!(created.game_type, "1");
    let game = state.sessions().get(&created.code).unwrap();
    assert_eq!(game.code, created.code);
    assert_eq!(game.deck.card_count(), 60);
    assert!(game.turns.is_empty());
}

#[test]
fn create_retries_taken_codes() {
    let state = build_state().build();
    let service = GameService::new();
    service.create_game_with(&state, |_| "AAAA".to_string()).unwrap();

    let mut candidates = vec!["BBBB", "AAAA"];
    let created = service
        .create_game_with(&state, |_| candidates.pop().unwrap().to_string())
        .unwrap();

    assert_eq!(created.code, "BBBB");
    assert_eq!(state.sessions().len(), 2);
}

#[test]
fn create_gives_up_when_every_code_is_taken() {
    let state = build_state().build();
    let service = GameService::new();
    service.create_game_with(&state, |_| "AAAA".to_string()).unwrap();

    let mut calls = 0;
    let err = service
        .create_game_with(&state, |_| {
            calls += 1;
            "AAAA".to_string()
        })
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::JoinCodeConflict, _)
    ));
    assert_eq!(calls, MAX_CODE_ATTEMPTS);
    assert_eq!(state.sessions().len(), 1);
}

#[test]
fn generator_receives_configured_length() {
    let state = build_state()
        .with_settings(GameSettings {
            code_length: 9,
            ..GameSettings::default()
        })
        .build();

    let created = GameService::new()
        .create_game_with(&state, |len| "X".repeat(len))
        .unwrap();

    assert_eq!(created.code, "XXXXXXXXX");
}

#[test]
fn join_appends_players_in_order() {
    let state = build_state().build();
    let service = GameService::new();
    let code = service.create_game(&state).unwrap().code;

    let alice = service.join_game(&state, &code, "Alice").unwrap();
    service.join_game(&state, &code, "Bob").unwrap();
    service.join_game(&state, &code, "Alice").unwrap();

    assert_eq!(alice.name, "Alice");
    assert!(alice.cards.is_empty());
    let names: Vec<String> = state
        .sessions()
        .get(&code)
        .unwrap()
        .players
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Alice"]);
}

#[test]
fn missing_game_is_reported_everywhere() {
    let state = build_state().build();
    let service = GameService::new();

    assert!(service.join_game(&state, "ZZZZ", "Alice").unwrap_err().is_game_not_found());
    assert!(service.fetch_game(&state, "ZZZZ").unwrap_err().is_game_not_found());
    assert!(service.advance_turn(&state, "ZZZZ").unwrap_err().is_game_not_found());
    assert!(state.sessions().is_empty());
}

#[test]
fn fetch_applies_turn_rule_and_is_idempotent_after() {
    let state = build_state().build();
    let service = GameService::new();
    let code = service.create_game(&state).unwrap().code;

    let first = service.fetch_game(&state, &code).unwrap();
    let second = service.fetch_game(&state, &code).unwrap();

    assert!(!first.deck.contains(spades_15()));
    assert_eq!(first.deck.card_count(), 59);
    assert_eq!(first, second);
    assert_eq!(second.turns.len(), 1);
    assert_eq!(second.turns[0].removed_cards, vec![spades_15()]);
}

#[test]
fn fetch_without_turn_leaves_deck_alone() {
    let state = build_state()
        .with_settings(GameSettings {
            fetch_advances_turn: false,
            ..GameSettings::default()
        })
        .build();
    let service = GameService::new();
    let code = service.create_game(&state).unwrap().code;

    let game = service.fetch_game(&state, &code).unwrap();

    assert!(game.deck.contains(spades_15()));
    assert_eq!(game.deck.card_count(), 60);
}

#[test]
fn advance_turn_reports_outcome() {
    let state = build_state().build();
    let service = GameService::new();
    let code = service.create_game(&state).unwrap().code;

    let outcome = service.advance_turn(&state, &code).unwrap();
    assert_eq!(outcome.game_code, code);
    assert_eq!(outcome.turn_number, Some(1));
    assert_eq!(outcome.removed_cards, vec![spades_15()]);
    assert_eq!(outcome.cards_remaining, 59);

    let again = service.advance_turn(&state, &code).unwrap();
    assert_eq!(again.turn_number, None);
    assert!(again.removed_cards.is_empty());
    assert_eq!(again.cards_remaining, 59);
}

#[test]
fn legacy_policy_never_leaves_a_placeholder_for_the_top_spade() {
    let state = build_state()
        .with_settings(GameSettings {
            removal_policy: RemovalPolicy::Legacy,
            ..GameSettings::default()
        })
        .build();
    let service = GameService::new();
    let code = service.create_game(&state).unwrap().code;

    let game = service.fetch_game(&state, &code).unwrap();
    let spades = game.deck.slots(Suit::Spades);

    assert_eq!(spades.len(), 14);
    assert!(!spades.iter().any(DeckSlot::is_placeholder));
}

#[test]
fn concurrent_joins_on_one_game_are_all_kept() {
    let state = build_state().build();
    let code = GameService::new().create_game(&state).unwrap().code;

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let state = state.clone();
            let code = code.clone();
            thread::spawn(move || {
                let service = GameService::new();
                for i in 0..10 {
                    service.join_game(&state, &code, &format!("p{t}-{i}")).unwrap();
                    service.fetch_game(&state, &code).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let game = state.sessions().get(&code).unwrap();
    assert_eq!(game.players.len(), 40);
    assert_eq!(game.turns.len(), 1);
}
