//! The probe loop.
//!
//! # Responsibilities
//! - Probe the target, classify, write one glyph, wait, repeat
//! - Stop when the shutdown signal fires
//!
//! # Design Decisions
//! - Shutdown is checked before every probe and raced against the probe and the wait
//! - A dropped, never-triggered `Shutdown` does not stop the loop
//! - An iteration cut short by shutdown writes nothing
//! - Every glyph is flushed as soon as it is written

use std::io::Write;
use thiserror::Error;
use tokio::sync::broadcast;
use crate::config::ProbeConfig;
use crate::probe::delay::Delay;
use crate::probe::outcome::{ProbeOutcome, ProbeTally};
use crate::probe::transport::Transport;

/// Errors that stop the prober.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The glyph stream could not be written (e.g. stdout closed).
    #[error("Failed to write glyph: {0}")]
    Output(#[from] std::io::Error),
}

/// Resolves once shutdown has been triggered.
///
/// A closed channel (every `Shutdown` dropped untriggered) can never fire, so it never resolves.
async fn shutdown_fired(shutdown: &mut broadcast::Receiver<()>) {
    if let Err(broadcast::error::RecvError::Closed) = shutdown.recv().await {
        std::future::pending::<()>().await;
    }
}

/// Probes one target forever, writing a glyph per probe to `out`.
pub struct Prober<T, D, W> {
    config: ProbeConfig,
    transport: T,
    delay: D,
    out: W,
}

impl<T, D, W> Prober<T, D, W>
where
    T: Transport,
    D: Delay,
    W: Write,
{
    pub fn new(config: ProbeConfig, transport: T, delay: D, out: W) -> Self {
        Self {
            config,
            transport,
            delay,
            out,
        }
    }

    /// Run a single probe and classify it. Writes nothing and does not wait.
    pub async fn probe_once(&self) -> ProbeOutcome {
        let result = self.transport.probe(&self.config.target).await;

        match &result {
            Ok(status) => tracing::debug!(target_url = %self.config.target, status = *status, "Probe answered"),
            Err(e) => tracing::debug!(target_url = %self.config.target, error = %e, "Probe failed"),
        }

        ProbeOutcome::from_result(&result)
    }

    fn emit(&mut self, outcome: ProbeOutcome) -> Result<(), ProbeError> {
        let mut buf = [0u8; 4];
        self.out
            .write_all(outcome.glyph().encode_utf8(&mut buf).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Run the loop until `shutdown` fires.
    ///
    /// Returns the tally of completed probes, or the output error that ended the run.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> Result<ProbeTally, ProbeError> {
        tracing::info!(
            target_url = %self.config.target,
            interval_ms = self.config.interval.as_millis() as u64,
            "Prober starting"
        );

        let mut tally = ProbeTally::default();

        loop {
            let outcome = tokio::select! {
                biased;
                _ = shutdown_fired(&mut shutdown) => {
                    tracing::debug!("Shutdown received before probe completed");
                    break;
                }
                outcome = self.probe_once() => outcome,
            };

            tracing::trace!(glyph = %outcome, "Emitting");
            self.emit(outcome)?;
            tally.record(outcome);

            tokio::select! {
                biased;
                _ = shutdown_fired(&mut shutdown) => {
                    tracing::debug!("Shutdown received during wait");
                    break;
                }
                _ = self.delay.wait(self.config.interval) => {}
            }
        }

        tracing::info!(
            probes = tally.total(),
            success = tally.success,
            failure = tally.failure,
            error = tally.error,
            "Prober stopped"
        );

        Ok(tally)
    }
}
