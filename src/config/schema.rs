//! Configuration schema definitions.

use std::time::Duration;

/// Delay between the end of one probe and the start of the next.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Immutable settings for one prober run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// URL probed on every iteration.
    pub target: String,

    /// Wait after each emitted glyph.
    pub interval: Duration,
}

impl ProbeConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}
