//! Environment-driven server configuration.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to bind (`HUDDLE_PORT`).
    pub port: u16,
    /// Count distinct users per slot instead of raw submissions
    /// (`HUDDLE_DEDUPE_USERS`). Off by default: raw counts are the behavior
    /// the API has always had, and flipping this materially changes which
    /// slots win.
    pub dedupe_users_per_slot: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dedupe_users_per_slot: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("HUDDLE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid HUDDLE_PORT: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let dedupe_users_per_slot = match env::var("HUDDLE_DEDUPE_USERS") {
            Ok(raw) => matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
            Err(_) => false,
        };

        Ok(Self {
            port,
            dedupe_users_per_slot,
        })
    }
}
