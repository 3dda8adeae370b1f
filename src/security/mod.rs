//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → headers.rs (strip hop-by-hop headers)
//!     → Forward to backend
//!
//! Backend response:
//!     → headers.rs (strip transport headers, inject CORS origin)
//!     → Relay to caller
//! ```
//!
//! # Design Decisions
//! - The backend is trusted completely; no content validation
//! - Header policy is static, not configurable

pub mod headers;
