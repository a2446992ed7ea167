//! Shutdown coordination for the daemon.

use std::sync::{Arc, OnceLock};

use tokio_util::sync::CancellationToken;

/// Why a lifetime context was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownCause {
    /// The owning scope finished its work and released the context.
    Completed,
    /// An operating-system interrupt or terminate request arrived.
    Interrupted,
}

impl std::fmt::Display for ShutdownCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownCause::Completed => write!(f, "completed"),
            ShutdownCause::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// The cause slot for one context, linked to the parent's slot so that a
/// child cancelled through the token tree can still report why.
#[derive(Debug)]
struct CauseCell {
    slot: OnceLock<ShutdownCause>,
    parent: Option<Arc<CauseCell>>,
}

/// Coordinator for graceful shutdown.
///
/// Wraps a [`CancellationToken`] with a cancellation cause. Clones share the
/// same context; [`Shutdown::child`] derives a new one. Cancellation flows
/// from parent to child only: cancelling a child never affects its parent.
///
/// Any number of tasks may await [`Shutdown::cancelled`] concurrently; once
/// the context is cancelled every observer sees the same state and the same
/// cause. Cancelling twice is a no-op and the first cause wins.
#[derive(Debug, Clone)]
pub struct Shutdown {
    token: CancellationToken,
    cause: Arc<CauseCell>,
}

impl Shutdown {
    /// Create a root lifetime context.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            cause: Arc::new(CauseCell {
                slot: OnceLock::new(),
                parent: None,
            }),
        }
    }

    /// Derive a child context.
    ///
    /// Cancelling `self` cancels the child as well; cancelling the child
    /// leaves `self` untouched.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            cause: Arc::new(CauseCell {
                slot: OnceLock::new(),
                parent: Some(Arc::clone(&self.cause)),
            }),
        }
    }

    /// Request cancellation with the given cause.
    ///
    /// Non-blocking and idempotent: if the context is already cancelled this
    /// does nothing, and concurrent callers race for a single cause slot.
    pub fn cancel(&self, cause: ShutdownCause) {
        if self.token.is_cancelled() {
            return;
        }
        let _ = self.cause.slot.set(cause);
        self.token.cancel();
    }

    /// Wait until the context is cancelled.
    ///
    /// Resolves immediately if cancellation already happened. Safe to await
    /// from any number of tasks.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The recorded cancellation cause, if any.
    ///
    /// A child cancelled through its parent reports the parent's cause.
    /// Returns `None` while the context is still active.
    pub fn cause(&self) -> Option<ShutdownCause> {
        let mut cell: &CauseCell = &self.cause;
        loop {
            if let Some(cause) = cell.slot.get() {
                return Some(*cause);
            }
            match &cell.parent {
                Some(parent) => cell = parent,
                None => return None,
            }
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
