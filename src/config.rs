//! Process settings, read from the environment once at startup.

use anyhow::{Context, Result};

use crate::services::anthropic::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub anthropic: AnthropicSettings,
}

impl Settings {
    /// Reads `HOST`, `PORT`, `LOG_LEVEL` and the `ANTHROPIC_*` variables.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Blank values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            anthropic: AnthropicSettings {
                api_key: var("ANTHROPIC_API_KEY"),
                base_url: var("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: var("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.bind_addr(), "0.0.0.0:8080");
        assert_eq!(s.log_level, "info");
        assert_eq!(s.anthropic.api_key, None);
        assert_eq!(s.anthropic.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.anthropic.model, DEFAULT_MODEL);
    }

    #[test]
    fn overrides_are_read() {
        let s = settings(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ("ANTHROPIC_MODEL", "claude-sonnet-4-5"),
        ])
        .unwrap();
        assert_eq!(s.bind_addr(), "127.0.0.1:3000");
        assert_eq!(s.anthropic.api_key.as_deref(), Some("sk-ant-test"));
        assert_eq!(s.anthropic.model, "claude-sonnet-4-5");
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let s = settings(&[("ANTHROPIC_API_KEY", "  ")]).unwrap();
        assert_eq!(s.anthropic.api_key, None);
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(settings(&[("PORT", "eighty")]).is_err());
        assert!(settings(&[("PORT", "70000")]).is_err());
    }
}
