//! Per-game settings shared by the service layer.

use crate::domain::RemovalPolicy;
use crate::utils::join_code::DEFAULT_CODE_LENGTH;

/// Game type tag stamped on new sessions.
pub const DEFAULT_GAME_TYPE: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Characters per join code.
    pub code_length: usize,
    /// Type tag of games created by this server.
    pub game_type: String,
    /// How the turn rule removes cards.
    pub removal_policy: RemovalPolicy,
    /// Whether fetching a game applies the turn rule first.
    pub fetch_advances_turn: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            game_type: DEFAULT_GAME_TYPE.to_string(),
            removal_policy: RemovalPolicy::Filter,
            fetch_advances_turn: true,
        }
    }
}
