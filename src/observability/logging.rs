//! Structured logging via tracing.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs the crate at `info`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; call once per
/// process, from `main`.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plinth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
