//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay core produces:
//!     → logging.rs (structured log events, response observer)
//!     → metrics.rs (counters, histograms)
//!     → tracing.rs (spans with request IDs)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through spans, not headers
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
pub mod tracing;
