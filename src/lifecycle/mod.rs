//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT → broadcast shutdown signal
//!
//! Shutdown (shutdown.rs):
//!     signal received → continuous loop drains → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
