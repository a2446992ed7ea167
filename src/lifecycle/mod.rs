//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Root Shutdown created → child derived for the serve session
//!     → interrupt handler installed → server blocks on cancelled()
//!
//! Shutdown (shutdown.rs):
//!     cancel(cause) → cause fixed once → done-signal broadcast → observers exit
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → single-shot select → cancel(Interrupted)
//! ```
//!
//! # Design Decisions
//! - Cancellation is monotonic: once requested it never clears
//! - Cancellation propagates parent → child only, never upward
//! - The signal listener wakes exactly once, then its task exits

pub mod shutdown;
pub mod signals;
