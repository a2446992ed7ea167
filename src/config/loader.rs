//! Layered configuration loading.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Prefix for all recognized environment variables.
pub const ENV_PREFIX: &str = "PLINTH_";

/// Errors that can occur while building the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or does not match the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment variable held a value the setting cannot accept.
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: String, value: String },
}

/// Settings supplied on the command line. Flags beat every other layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--port` flag, if given.
    pub port: Option<u16>,
}

/// Build the configuration: defaults, then file, then environment, then flags.
pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env(&mut config, |key| std::env::var(key).ok())?;

    if let Some(port) = overrides.port {
        config.server.port = port;
    }

    Ok(config)
}

/// Map a dotted setting name to its environment variable.
///
/// `.` and `-` both become `_`: `server.port` reads `PLINTH_SERVER_PORT`.
pub fn env_key(setting: &str) -> String {
    let mut key = String::with_capacity(ENV_PREFIX.len() + setting.len());
    key.push_str(ENV_PREFIX);
    for ch in setting.chars() {
        match ch {
            '.' | '-' => key.push('_'),
            _ => key.push(ch.to_ascii_uppercase()),
        }
    }
    key
}

/// Overlay environment variables onto a partially-built config.
///
/// Takes the lookup as a closure so tests can inject an environment without
/// mutating process state.
fn apply_env(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let port_key = env_key("server.port");
    if let Some(raw) = lookup(&port_key) {
        config.server.port = raw.parse().map_err(|_| ConfigError::InvalidEnv {
            key: port_key,
            value: raw,
        })?;
    }

    let debug_key = env_key("debug");
    if let Some(raw) = lookup(&debug_key) {
        config.debug = parse_bool(&raw).ok_or(ConfigError::InvalidEnv {
            key: debug_key,
            value: raw,
        })?;
    }

    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
