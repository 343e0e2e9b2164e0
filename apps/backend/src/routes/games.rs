//! Game session HTTP routes.
//!
//! The paths, status codes and plain-text bodies of create, fetch and join
//! are a compatibility contract with existing clients.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Result};
use tracing::{debug, error};

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

pub const FETCH_NOT_FOUND_MESSAGE: &str = "No game was found!";
pub const JOIN_NOT_FOUND_MESSAGE: &str = "Could not add user for game!";

/// Missing sessions keep their endpoint-specific plain-text 404.
fn session_error(err: DomainError, not_found_message: &'static str) -> AppError {
    if err.is_game_not_found() {
        AppError::session_not_found(not_found_message)
    } else {
        err.into()
    }
}

/// GET /game/
///
/// Creates a session and answers 202 with a one-line confirmation.
async fn create_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let game = GameService::new().create_game(&app_state)?;

    Ok(HttpResponse::Accepted()
        .content_type(ContentType::plaintext())
        .body(format!(
            "Here's your new game: {}, {}",
            game.code, game.game_type
        )))
}

/// GET /game/{game_type}/{code}
///
/// Returns the whole session as JSON. Depending on configuration the turn
/// rule is applied before the snapshot is taken.
async fn get_game(
    path: web::Path<(String, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_type, code) = path.into_inner();
    debug!(game_code = %code, requested_type = %game_type, "fetching game");

    let game = GameService::new()
        .fetch_game(&app_state, &code)
        .map_err(|e| session_error(e, FETCH_NOT_FOUND_MESSAGE))?;

    let body = serde_json::to_string(&game).map_err(|e| {
        error!(game_code = %code, error = %e, "failed to serialize game");
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// POST /game/{game_type}/{code}/user/{user_name}
///
/// Adds a player and echoes the player's name.
async fn add_player(
    path: web::Path<(String, String, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (_game_type, code, user_name) = path.into_inner();

    let player = GameService::new()
        .join_game(&app_state, &code, &user_name)
        .map_err(|e| session_error(e, JOIN_NOT_FOUND_MESSAGE))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(player.name))
}

/// POST /game/{game_type}/{code}/turn
///
/// Applies the turn rule without returning the full game.
async fn advance_turn(
    path: web::Path<(String, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (_game_type, code) = path.into_inner();

    let outcome = GameService::new()
        .advance_turn(&app_state, &code)
        .map_err(|e| session_error(e, FETCH_NOT_FOUND_MESSAGE))?;

    Ok(HttpResponse::Ok().json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/game/").route(web::get().to(create_game)));
    cfg.service(web::resource("/game/{game_type}/{code}").route(web::get().to(get_game)));
    cfg.service(
        web::resource("/game/{game_type}/{code}/user/{user_name}")
            .route(web::post().to(add_player)),
    );
    cfg.service(
        web::resource("/game/{game_type}/{code}/turn").route(web::post().to(advance_turn)),
    );
}
