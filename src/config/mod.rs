//! Configuration for the prober.
//!
//! # Data Flow
//! ```text
//! command line (positional URL)
//!     → ProbeConfig::new (fixed interval)
//!     → owned by the Prober for the process lifetime
//! ```
//!
//! # Design Decisions
//! - The target is never validated; a bad URL surfaces as `_` glyphs
//! - The interval is fixed for the binary and only settable from code

pub mod schema;

pub use schema::{ProbeConfig, DEFAULT_INTERVAL};
