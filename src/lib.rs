//! Plinth service foundation library.
//!
//! # Architecture Overview
//!
//! ```text
//!   plinthd serve                         plinth (management CLI)
//!        │                                      │
//!        ▼                                      ▼
//!   ┌─────────┐    ┌─────────┐           ┌─────────┐
//!   │   cli   │───▶│ config  │           │   cli   │
//!   │ builders│    │ loader  │           │ builders│
//!   └────┬────┘    └────┬────┘           └─────────┘
//!        │              │
//!        ▼              ▼
//!   ┌──────────────────────────┐
//!   │         server           │
//!   │  banner → await → exit   │
//!   └────────────┬─────────────┘
//!                │ observes
//!                ▼
//!   ┌──────────────────────────┐    ┌──────────────┐
//!   │    lifecycle::shutdown   │◀───│  lifecycle:: │◀── SIGINT/SIGTERM
//!   │  cancellable context     │    │   signals    │
//!   └──────────────────────────┘    └──────────────┘
//! ```
//!
//! The interesting machinery lives in [`lifecycle`]: a cancellable lifetime
//! context with a recorded cancellation cause, bridged from OS termination
//! signals. Everything else is wiring: command-tree construction, layered
//! configuration, and a run loop that blocks on the context's done-signal.

pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod server;

pub use config::schema::AppConfig;
pub use lifecycle::shutdown::{Shutdown, ShutdownCause};
pub use server::Server;
