//! Configuration loading and representation.
//!
//! Values come from `ROSTER_*` environment variables; anything unset falls
//! back to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::access::Latency;

pub const BIND_ADDR_VAR: &str = "ROSTER_BIND_ADDR";
pub const LATENCY_VAR: &str = "ROSTER_LATENCY_MS";
pub const SEED_VAR: &str = "ROSTER_SEED";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Process configuration for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub latency: Latency,
    /// Start with the demonstration records.
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080))),
            latency: Latency::default(),
            seed: true,
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(BIND_ADDR_VAR, &raw, format!("{e}")))?;
        }

        if let Some(raw) = lookup(LATENCY_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(LATENCY_VAR, &raw, format!("{e}")))?;
            config.latency = Latency::uniform(Duration::from_millis(millis));
        }

        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = parse_bool(&raw)
                .ok_or_else(|| ConfigError::invalid(SEED_VAR, &raw, "expected true/false"))?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.latency.list, Duration::from_millis(800));
        assert!(config.seed);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (LATENCY_VAR, "0"),
            (SEED_VAR, "off"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.latency, Latency::none());
        assert!(!config.seed);
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = load(&[(LATENCY_VAR, "soon")]).unwrap_err();
        assert!(err.to_string().starts_with("ROSTER_LATENCY_MS: invalid value \"soon\""));

        let err = load(&[(SEED_VAR, "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: SEED_VAR, .. }));

        assert!(load(&[(BIND_ADDR_VAR, "localhost")]).is_err());
    }
}
