use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not a valid IP address: {0}")]
    InvalidHost(String),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or blank
    /// values fall back to the defaults; the API key is passed through as-is.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match var("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => defaults.host,
        };

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            base_url: var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: var("OPENAI_MODEL").unwrap_or(defaults.model),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert!(cfg.api_key.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:4010/v1/"),
            ("OPENAI_MODEL", "gpt-4o"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.base_url, "http://localhost:4010/v1");
        assert_eq!(cfg.model, "gpt-4o");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", " "), ("OPENAI_MODEL", "")]))
            .unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.model, DEFAULT_MODEL);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    }

    #[test]
    fn rejects_bad_host() {
        let err = AppConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));
    }
}
