use anyhow::{Context, Result};

/// Port the service listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5598;

/// Application configuration loaded from environment variables.
/// Nothing is required; every value has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixed RNG seed for every request. Unset means a fresh entropy seed per request.
    pub puzzle_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => DEFAULT_PORT,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            puzzle_seed: optional_env("PUZZLE_SEED")
                .map(|seed| {
                    seed.parse::<u64>()
                        .context("PUZZLE_SEED must be an unsigned 64-bit integer")
                })
                .transpose()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            puzzle_seed: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
