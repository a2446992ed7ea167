//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled defaults
//!     → optional TOML file (loader.rs, parse & deserialize)
//!     → PLINTH_* environment variables
//!     → explicit CLI flags
//!     → AppConfig (immutable once built)
//! ```
//!
//! # Design Decisions
//! - Later layers win: flag > environment > file > default
//! - All fields have defaults so every layer is optional
//! - Binding failures surface as a Result before the server starts,
//!   never as a panic: the caller decides whether to abort
//! - `debug` has no CLI flag; it resolves from environment/file only
//!   (wiring deliberately left incomplete, see DESIGN.md)

pub mod loader;
pub mod schema;

pub use loader::{load, ConfigError, Overrides};
pub use schema::{AppConfig, ServerConfig, DEFAULT_PORT};
