//! Server run loop.
//!
//! # Responsibilities
//! - Announce startup on stdout (port and debug flag)
//! - Block on the lifetime context's done-signal
//! - Confirm shutdown on stdout and return cleanly
//!
//! # Design Decisions
//! - The banner and shutdown lines are a console contract and go to
//!   stdout via plain prints; tracing carries the diagnostic detail
//! - No request handling lives here yet; the loop only banners and waits

use crate::config::AppConfig;
use crate::lifecycle::shutdown::Shutdown;

/// The plinth server.
///
/// Owns its configuration; the caller owns the lifetime context.
pub struct Server {
    config: AppConfig,
}

impl Server {
    /// Create a server from a fully-resolved configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The port this server reports listening on.
    pub fn port(&self) -> u16 {
        self.config.server.port
    }

    /// Startup banner text.
    pub fn banner(&self) -> String {
        format!(
            "Starting server on port {} (debug: {})",
            self.config.server.port, self.config.debug
        )
    }

    /// Run until the given context is cancelled.
    ///
    /// Resolves immediately if the context is already cancelled; the
    /// shutdown confirmation still prints so the console contract holds.
    pub async fn run(&self, shutdown: &Shutdown) {
        println!("{}", self.banner());
        tracing::info!(
            port = self.config.server.port,
            debug = self.config.debug,
            "Server started"
        );

        // TODO: serve real traffic here once the first endpoint lands.
        shutdown.cancelled().await;

        println!("Server shutting down...");
        match shutdown.cause() {
            Some(cause) => tracing::info!(%cause, "Server stopped"),
            None => tracing::info!("Server stopped"),
        }
    }
}
