use super::session_store::SessionStore;
use crate::config::GameSettings;

/// Application state containing shared resources
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Live sessions keyed by join code
    pub sessions: SessionStore,
    /// Behaviour of games created and served by this process
    pub settings: GameSettings,
}

impl AppState {
    /// Create a new AppState with the given session store and settings
    pub fn new(sessions: SessionStore, settings: GameSettings) -> Self {
        Self { sessions, settings }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }
}
