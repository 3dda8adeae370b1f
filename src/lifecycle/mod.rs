//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → wait_for_termination resolves
//!
//! Shutdown (shutdown.rs):
//!     trigger() → server stops accepting → in-flight exchanges finish → exit
//! ```
//!
//! # Design Decisions
//! - The server takes a shutdown receiver instead of listening for signals
//!   itself, so tests can stop it deterministically

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_termination;
