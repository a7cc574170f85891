//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → prober observes receiver → loop exits after current step
//! ```
//!
//! # Design Decisions
//! - The prober never stops on its own; only a signal or a broken stdout ends it
//! - No drain phase: an in-flight probe is abandoned and writes nothing

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
