//! Glyph monitor library.
//!
//! Probes one HTTP(S) target at a fixed interval and writes one glyph per probe:
//! `o` for a status in `[200, 400)`, `.` for any other status, `_` when no response arrived.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod probe;

pub use config::ProbeConfig;
pub use lifecycle::Shutdown;
pub use probe::{HttpTransport, ProbeOutcome, Prober, TokioDelay};
