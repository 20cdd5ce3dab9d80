//! OS signal handling.
//!
//! Ctrl-C translates to the internal shutdown signal so the continuous loop
//! can finish its in-flight bulk request before exiting.

use crate::lifecycle::shutdown::Shutdown;

/// Spawn a task that triggers shutdown on Ctrl-C.
pub fn spawn_ctrl_c_handler(shutdown: Shutdown) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl-C received, shutting down");
            shutdown.trigger();
        }
    });
}
