//! Game session services: create, join, fetch and advance turns.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{Card, Game, Player};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::state::app_state::AppState;
use crate::utils::join_code::generate_join_code;

/// How many fresh codes to try before giving up on a create.
pub const MAX_CODE_ATTEMPTS: usize = 16;

/// Identity of a freshly created session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub code: String,
    pub game_type: String,
}

/// Result of applying the turn rule to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub game_code: String,
    /// Number of the logged turn, `None` when nothing was removed.
    pub turn_number: Option<usize>,
    pub removed_cards: Vec<Card>,
    pub cards_remaining: usize,
}

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a session with a freshly populated deck under a new join code.
    pub fn create_game(&self, state: &AppState) -> Result<NewGame, DomainError> {
        self.create_game_with(state, generate_join_code)
    }

    /// Like [`GameService::create_game`] with a caller-supplied code generator.
    pub fn create_game_with<G>(
        &self,
        state: &AppState,
        mut generate: G,
    ) -> Result<NewGame, DomainError>
    where
        G: FnMut(usize) -> String,
    {
        let settings = state.settings();

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate(settings.code_length);
            let game = Game::new(code.clone(), settings.game_type.clone());

            match state.sessions().insert_new(game) {
                Ok(()) => {
                    info!(game_code = %code, game_type = %settings.game_type, "game created");
                    return Ok(NewGame {
                        code,
                        game_type: settings.game_type.clone(),
                    });
                }
                Err(_) => warn!(game_code = %code, attempt, "join code already in use"),
            }
        }

        Err(DomainError::conflict(
            ConflictKind::JoinCodeConflict,
            format!("no free join code after {MAX_CODE_ATTEMPTS} attempts"),
        ))
    }

    /// Append a player named `name` to the session under `code`.
    pub fn join_game(
        &self,
        state: &AppState,
        code: &str,
        name: &str,
    ) -> Result<Player, DomainError> {
        let player = state
            .sessions()
            .update(code, |game| game.add_player(name))
            .ok_or_else(|| DomainError::game_not_found(code))?;

        info!(game_code = %code, player = %player.name, "player joined");
        Ok(player)
    }

    /// Snapshot of the session under `code`.
    ///
    /// When `fetch_advances_turn` is set the turn rule runs first, so the
    /// returned snapshot already reflects it.
    pub fn fetch_game(&self, state: &AppState, code: &str) -> Result<Game, DomainError> {
        let settings = state.settings();

        let game = if settings.fetch_advances_turn {
            state.sessions().update(code, |game| {
                game.advance_turn(settings.removal_policy);
                game.clone()
            })
        } else {
            state.sessions().get(code)
        };

        let game = game.ok_or_else(|| DomainError::game_not_found(code))?;
        debug!(
            game_code = %code,
            players = game.players.len(),
            cards = game.deck.card_count(),
            "game fetched"
        );
        Ok(game)
    }

    /// Apply the turn rule to the session under `code`.
    pub fn advance_turn(&self, state: &AppState, code: &str) -> Result<TurnOutcome, DomainError> {
        let policy = state.settings().removal_policy;

        let outcome = state
            .sessions()
            .update(code, |game| {
                let (turn_number, removed_cards) = match game.advance_turn(policy) {
                    Some(turn) => (Some(turn.turn_number), turn.removed_cards.clone()),
                    None => (None, Vec::new()),
                };
                TurnOutcome {
                    game_code: game.code.clone(),
                    turn_number,
                    removed_cards,
                    cards_remaining: game.deck.card_count(),
                }
            })
            .ok_or_else(|| DomainError::game_not_found(code))?;

        debug!(
            game_code = %code,
            removed = outcome.removed_cards.len(),
            cards_remaining = outcome.cards_remaining,
            "turn advanced"
        );
        Ok(outcome)
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
