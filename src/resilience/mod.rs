//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to backend:
//!     → timeouts.rs (bound the whole round trip)
//!     → On failure: relay answers 500, no retry
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every backend call has a deadline
//! - No retries and no circuit breaking: one attempt per inbound request

pub mod timeouts;

pub use timeouts::{with_timeout, TimedOut};
