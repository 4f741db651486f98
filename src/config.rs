//! Relay configuration, read once at startup from the environment

use crate::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::net::SocketAddr;
use thiserror::Error;

/// Port used when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 3001;

/// Errors that prevent the relay from starting
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is missing; set it in the environment or a .env file")]
    MissingApiKey,
}

/// Configuration for the relay process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub api_key: String,
    pub port: u16,
    pub model: String,
    pub base_url: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "Ignoring invalid PORT");
                DEFAULT_PORT
            }),
        };

        let model = lookup("GEMINI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("GEMINI_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            port,
            model,
            base_url,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
