pub mod game;
pub mod server;

pub use game::{GameSettings, DEFAULT_GAME_TYPE};
pub use server::ServerConfig;
