//! Service configuration loaded from the environment.

use std::time::Duration;

use notes_core::PromptOptions;
use thiserror::Error;

use crate::services::llm::GeminiConfig;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub prompt: PromptOptions,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// Required env vars:
    /// - GEMINI_API_KEY: API key for the Gemini API
    ///
    /// Optional: HOST, PORT, GEMINI_MODEL, GEMINI_BASE_URL,
    /// GEMINI_TIMEOUT_SECS, MAX_UPLOAD_BYTES, MIN_FLASHCARDS, MAX_FLASHCARDS.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let defaults = PromptOptions::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            prompt: PromptOptions {
                min_flashcards: parse_or(&lookup, "MIN_FLASHCARDS", defaults.min_flashcards)?,
                max_flashcards: parse_or(&lookup, "MAX_FLASHCARDS", defaults.max_flashcards)?,
            },
            gemini: GeminiConfig {
                api_key,
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: lookup("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
                timeout: Duration::from_secs(parse_or(&lookup, "GEMINI_TIMEOUT_SECS", 60)?),
            },
        })
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_only_api_key() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.gemini.timeout, Duration::from_secs(60));
        assert_eq!(config.prompt, PromptOptions::default());
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn missing_api_key() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "8080")]));
        assert!(matches!(result, Err(ConfigError::Missing("GEMINI_API_KEY"))));

        let blank = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")]));
        assert!(matches!(blank, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn invalid_port() {
        let result = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("PORT", "eighty"),
        ]));
        match result {
            Err(ConfigError::Invalid { key, value }) => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("expected invalid port, got {:?}", other),
        }
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_TIMEOUT_SECS", "5"),
            ("MIN_FLASHCARDS", "2"),
            ("MAX_FLASHCARDS", "10"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.timeout, Duration::from_secs(5));
        assert_eq!(config.prompt.min_flashcards, 2);
        assert_eq!(config.prompt.max_flashcards, 10);
    }
}
