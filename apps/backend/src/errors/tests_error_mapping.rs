// Unit tests for error mapping - pure domain logic without HTTP
use actix_web::body::MessageBody;
use actix_web::ResponseError;

use crate::domain::{Card, RemovalPolicy, Suit};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rejected_card_to_validation() {
    let err = Card::new(16, Suit::Hearts).unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);

    let app: AppError = "shuffle".parse::<RemovalPolicy>().unwrap_err().into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_join_code_conflict_to_409() {
    let join = DomainError::conflict(ConflictKind::JoinCodeConflict, "no free code");
    let app: AppError = join.into();
    assert_eq!(app.code().as_str(), "JOIN_CODE_CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_game_not_found_to_404() {
    let app: AppError = DomainError::game_not_found("ZZZZ").into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);
    assert_eq!(app.status().as_u16(), 404);
    assert!(app.detail().contains("ZZZZ"));
}

#[test]
fn json_failures_map_to_serialization_500() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app: AppError = json_err.into();
    assert_eq!(app.code(), ErrorCode::SerializationFailed);
    assert_eq!(app.status().as_u16(), 500);
    assert!(app.detail().starts_with("json error:"));
}

#[test]
fn config_errors_are_500() {
    let app = AppError::config("CRABBIE_PORT is invalid");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn game_not_found_helper_is_recognised() {
    assert!(DomainError::game_not_found("AB12").is_game_not_found());
    assert!(!DomainError::validation("nope").is_game_not_found());
}

#[test]
fn session_not_found_renders_plain_text() {
    let err = AppError::session_not_found("No game was found!");
    let resp = err.error_response();

    assert_eq!(resp.status().as_u16(), 404);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert!(resp.headers().contains_key("x-trace-id"));
    let body = resp.into_body().try_into_bytes().ok().expect("in-memory body");
    assert_eq!(&body[..], b"No game was found!");
}

#[test]
fn problem_title_is_humanized() {
    let resp = AppError::conflict(ErrorCode::JoinCodeConflict, "taken").error_response();
    let body = resp.into_body().try_into_bytes().ok().expect("in-memory body");
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["title"], "Join Code Conflict");
    assert_eq!(json["type"], "https://crabbie.app/errors/JOIN_CODE_CONFLICT");
    assert_eq!(json["trace_id"], "unknown");
}
