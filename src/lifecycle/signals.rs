//! OS signal handling.
//!
//! # Responsibilities
//! - Register listeners for SIGINT and SIGTERM
//! - Translate the first delivered signal into a clean cancellation
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Registration failure is surfaced to the caller, not swallowed:
//!   starting without graceful shutdown would be a silent capability loss
//! - The listener is single-shot; repeated signals fall back to the
//!   host default (immediate termination) once the task has exited

use tokio::signal::unix::{signal, SignalKind};

use crate::lifecycle::shutdown::{Shutdown, ShutdownCause};

/// Install a termination-signal listener for the given context.
///
/// Returns immediately after registering; the wait runs on a spawned task
/// that performs a single-shot select between "signal arrived" and "context
/// already cancelled elsewhere", then exits. Whichever side wins, the
/// context ends up cancelled at most once.
///
/// # Errors
///
/// Fails if the process environment does not support signal registration.
/// Callers should treat this as fatal at startup.
pub fn install_interrupt_handler(shutdown: &Shutdown) -> std::io::Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => {
                tracing::info!(signal = "SIGINT", "Termination signal received");
                shutdown.cancel(ShutdownCause::Interrupted);
            }
            _ = sigterm.recv() => {
                tracing::info!(signal = "SIGTERM", "Termination signal received");
                shutdown.cancel(ShutdownCause::Interrupted);
            }
            _ = shutdown.cancelled() => {
                // Cancelled through another path; nothing left to do here.
            }
        }
    });

    Ok(())
}
