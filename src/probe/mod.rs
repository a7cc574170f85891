//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Prober loop (prober.rs):
//!     Shutdown check
//!     → transport.rs (one GET against the target)
//!     → outcome.rs (status code or transport error → ProbeOutcome)
//!     → one glyph written to the sink and flushed
//!     → delay.rs (fixed wait)
//!     → repeat
//! ```
//!
//! # Design Decisions
//! - Transport and delay are injected so the loop runs without network or wall clock in tests
//! - Exactly one probe in flight, iterations never overlap
//! - Probe failures never leave the loop; only a broken output sink does

pub mod delay;
pub mod outcome;
pub mod prober;
pub mod transport;

pub use delay::{Delay, TokioDelay};
pub use outcome::{ProbeOutcome, ProbeTally};
pub use prober::{ProbeError, Prober};
pub use transport::{HttpTransport, Transport, TransportError};
