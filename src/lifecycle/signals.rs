//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for SIGINT (all platforms) and SIGTERM (unix)
//! - Translate the first one into a shutdown trigger
//! - Report which signal arrived so the binary can exit with `128 + signo`

use std::future::Future;
use std::io;
use crate::lifecycle::Shutdown;

/// Termination signals the prober reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Interrupt,
    Terminate,
}

impl Signal {
    pub fn name(self) -> &'static str {
        match self {
            Signal::Interrupt => "SIGINT",
            Signal::Terminate => "SIGTERM",
        }
    }

    /// Exit status of a process killed by this signal (`128 + signo`).
    pub fn exit_code(self) -> i32 {
        let signo = match self {
            Signal::Interrupt => 2,
            Signal::Terminate => 15,
        };
        128 + signo
    }
}

/// Wait for SIGINT, or SIGTERM on unix.
pub async fn wait_for_signal() -> io::Result<Signal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res?;
                Ok(Signal::Interrupt)
            }
            _ = terminate.recv() => Ok(Signal::Terminate),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(Signal::Interrupt)
    }
}

/// Spawn a task that fires `shutdown` on the first termination signal.
///
/// If the handlers cannot be installed the process keeps running until killed.
pub fn spawn_signal_handler(shutdown: Shutdown) -> tokio::task::JoinHandle<Option<Signal>> {
    spawn_shutdown_on(wait_for_signal(), shutdown)
}

/// Spawn a task that fires `shutdown` once `signal` resolves successfully.
///
/// Resolves to the signal received, or `None` when waiting failed and nothing was triggered.
pub fn spawn_shutdown_on<F>(signal: F, shutdown: Shutdown) -> tokio::task::JoinHandle<Option<Signal>>
where
    F: Future<Output = io::Result<Signal>> + Send + 'static,
{
    tokio::spawn(async move {
        match signal.await {
            Ok(signal) => {
                tracing::info!(signal = signal.name(), "Signal received, stopping prober");
                shutdown.trigger();
                Some(signal)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handlers");
                None
            }
        }
    })
}
