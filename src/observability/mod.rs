//! Observability subsystem.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for both binaries
//!
//! # Design Decisions
//! - Log level configurable via RUST_LOG, quiet default otherwise
//! - The stdout console contract (banner, shutdown line, errors) is
//!   owned by the server and mains, not by this module

pub mod logging;
