//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Compiled-in default for the server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the daemon.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Server settings.
    pub server: ServerConfig,

    /// Verbose diagnostics toggle. No CLI flag binds this yet.
    pub debug: bool,
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the server reports listening on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
