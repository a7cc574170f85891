//! Probe outcome classification.

use std::fmt;
use crate::probe::transport::TransportError;

/// Result of a single probe against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// A response arrived with a status in `[200, 400)`.
    Success,
    /// A response arrived with any other status.
    Failure,
    /// No response at all (DNS, connect, TLS, invalid URL, ...).
    Error,
}

impl ProbeOutcome {
    /// Classify an HTTP status code.
    pub fn from_status(code: u16) -> Self {
        if (200..400).contains(&code) {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Classify the raw result of a transport call.
    pub fn from_result(result: &Result<u16, TransportError>) -> Self {
        match result {
            Ok(code) => Self::from_status(*code),
            Err(_) => Self::Error,
        }
    }

    /// The character written to the glyph stream for this outcome.
    pub fn glyph(self) -> char {
        match self {
            Self::Success => 'o',
            Self::Failure => '.',
            Self::Error => '_',
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Per-outcome counters for one run of the prober.
///
/// Only reported in the log line emitted when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeTally {
    pub success: u64,
    pub failure: u64,
    pub error: u64,
}

impl ProbeTally {
    pub fn record(&mut self, outcome: ProbeOutcome) {
        match outcome {
            ProbeOutcome::Success => self.success += 1,
            ProbeOutcome::Failure => self.failure += 1,
            ProbeOutcome::Error => self.error += 1,
        }
    }

    /// Number of completed probes.
    pub fn total(&self) -> u64 {
        self.success + self.failure + self.error
    }
}
