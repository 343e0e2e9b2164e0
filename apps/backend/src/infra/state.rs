use crate::config::GameSettings;
use crate::state::app_state::AppState;
use crate::state::session_store::SessionStore;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    settings: GameSettings,
    sessions: Option<SessionStore>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            settings: GameSettings::default(),
            sessions: None,
        }
    }

    pub fn with_settings(mut self, settings: GameSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Reuse an existing registry instead of starting empty.
    pub fn with_sessions(mut self, sessions: SessionStore) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(self.sessions.unwrap_or_default(), self.settings)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
