//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::auth::RuntimeConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_url: Option<String>,
    pub website_url: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FINTRACK_API_URL`: API origin published to the browser
    /// - `FINTRACK_WEBSITE_URL`: website origin published to the browser
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
        };
        Ok(Self {
            port,
            api_url: non_blank(lookup("FINTRACK_API_URL")),
            website_url: non_blank(lookup("FINTRACK_WEBSITE_URL")),
        })
    }

    /// Origins handed to the browser bundle through the SSR shell.
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig { api_url: self.api_url.clone(), website_url: self.website_url.clone() }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
