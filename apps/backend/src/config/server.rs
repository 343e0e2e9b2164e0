//! Server configuration loaded from environment variables.

use std::env;

use super::game::GameSettings;
use crate::domain::RemovalPolicy;
use crate::error::AppError;

const MAX_CODE_LENGTH: usize = 32;

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Browser origins allowed by CORS
    pub cors_allowed_origins: Vec<String>,

    // Game behaviour
    pub game: GameSettings,
}

impl ServerConfig {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameSettings::default();

        let host = lookup("CRABBIE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "CRABBIE_PORT", 8080u16)?;

        let code_length = parse_var(&lookup, "CRABBIE_CODE_LENGTH", defaults.code_length)?;
        if !(1..=MAX_CODE_LENGTH).contains(&code_length) {
            return Err(AppError::config(format!(
                "CRABBIE_CODE_LENGTH must be between 1 and {MAX_CODE_LENGTH}, got {code_length}"
            )));
        }

        let game_type = lookup("CRABBIE_GAME_TYPE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.game_type);

        let removal_policy = match lookup("CRABBIE_REMOVAL_POLICY") {
            Some(raw) => raw
                .parse::<RemovalPolicy>()
                .map_err(|e| AppError::config(format!("CRABBIE_REMOVAL_POLICY: {e}")))?,
            None => defaults.removal_policy,
        };

        let fetch_advances_turn = match lookup("CRABBIE_FETCH_ADVANCES_TURN") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "CRABBIE_FETCH_ADVANCES_TURN must be true or false, got '{raw}'"
                ))
            })?,
            None => defaults.fetch_advances_turn,
        };

        // Comma-separated, e.g. http://localhost:3000,https://cards.example.org
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
            .map(str::to_string)
            .collect();

        Ok(ServerConfig {
            host,
            port,
            cors_allowed_origins,
            game: GameSettings {
                code_length,
                game_type,
                removal_policy,
                fetch_advances_turn,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("{name} is invalid ('{raw}'): {e}"))),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
