#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a response body as JSON.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Response body is not JSON: {}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// Read a response body as UTF-8 text.
pub async fn read_text(resp: ServiceResponse<BoxBody>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("Response body should be valid UTF-8")
}

/// Pull the join code out of "Here's your new game: {code}, {type}".
pub fn code_from_confirmation(text: &str) -> String {
    let rest = text
        .strip_prefix("Here's your new game: ")
        .unwrap_or_else(|| panic!("unexpected confirmation: {text}"));
    let (code, _game_type) = rest
        .split_once(", ")
        .unwrap_or_else(|| panic!("unexpected confirmation: {text}"));
    code.to_string()
}

/// Ranks of one suit in a serialized deck, placeholders included as 0.
pub fn suit_ranks(game: &Value, suit: &str) -> Vec<u64> {
    game["deck_cards"][suit]
        .as_array()
        .unwrap_or_else(|| panic!("deck has no {suit} entry"))
        .iter()
        .map(|card| card["card_rank"].as_u64().expect("card_rank is a number"))
        .collect()
}
