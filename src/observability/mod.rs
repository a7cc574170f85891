//! Observability.
//!
//! # Design Decisions
//! - stdout belongs to the glyph stream; every diagnostic goes to stderr
//! - Quiet by default, per-probe detail available at debug/trace via `RUST_LOG`

pub mod logging;

pub use logging::init_logging;
