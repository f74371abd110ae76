use std::fmt;

use anyhow::Result;
use tokio::signal;

/// The signal that ended the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    CtrlC,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CtrlC => f.write_str("Ctrl+C"),
            Self::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Wait for Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    let received = tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            ShutdownSignal::CtrlC
        }
        result = wait_terminate() => {
            result?;
            ShutdownSignal::Terminate
        }
    };

    tracing::info!(signal = %received, "shutdown signal received");
    Ok(received)
}

/// Future suitable for `axum::serve(..).with_graceful_shutdown(..)`.
///
/// A failing signal handler is logged and then treated as Ctrl+C only.
pub async fn shutdown_signal() {
    if let Err(e) = wait_for_shutdown().await {
        tracing::warn!(error = %e, "signal handler failed, falling back to Ctrl+C only");
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C handler failed");
        }
    }
}

#[cfg(unix)]
async fn wait_terminate() -> Result<()> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    sigterm.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn wait_terminate() -> Result<()> {
    std::future::pending::<Result<()>>().await
}
