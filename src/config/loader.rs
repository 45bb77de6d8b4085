//! Load config from the process environment (optionally seeded from `.env`).

use crate::config::types::{ClientConfig, ServerConfig};
use crate::config::validator::{normalize_api_url, parse_body_limit, parse_port};
use crate::error::ConfigError;
use std::path::PathBuf;

pub const ENV_API_URL: &str = "PORTAL_API_URL";
pub const ENV_HOST: &str = "PORTAL_HOST";
pub const ENV_PORT: &str = "PORTAL_PORT";
pub const ENV_SEED: &str = "PORTAL_SEED";
pub const ENV_BODY_LIMIT: &str = "PORTAL_BODY_LIMIT";

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(env_lookup)
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL) {
            config.api_url = normalize_api_url(&url)?;
        }
        Ok(config)
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup(ENV_HOST) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(ENV_PORT) {
            config.port = parse_port(&port)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            config.seed_path = Some(PathBuf::from(seed.trim()));
        }
        if let Some(limit) = lookup(ENV_BODY_LIMIT) {
            config.body_limit = parse_body_limit(&limit)?;
        }
        Ok(config)
    }
}
