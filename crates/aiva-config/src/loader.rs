//! Configuration loading from the process environment.

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Resolved backend configuration.
#[derive(Debug, Clone)]
pub struct AivaConfig {
    /// Generative-language API credential.
    pub api_key: String,
    /// Listen address host.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Model used for both chat and command classification.
    pub model: String,
}

impl AivaConfig {
    /// Load configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` is required; `HOST`, `PORT` and `AIVA_MODEL` fall
    /// back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::EnvVarNotSet("GEMINI_API_KEY".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let model = lookup("AIVA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            host,
            port,
            model,
        })
    }

    /// The listening address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
