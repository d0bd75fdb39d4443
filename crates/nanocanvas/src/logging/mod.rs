//! Logger setup for binaries built on the canvas.
//!
//! The library itself only emits through the `log` facade; installing a
//! backend is left to the application. `init_logging` wires up `env_logger`
//! for the common case.

mod init;

pub use init::{init_logging, LoggingConfig};
