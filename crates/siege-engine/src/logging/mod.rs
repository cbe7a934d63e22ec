//! Logging utilities.
//!
//! Logger initialization lives here; the rest of the crate only uses the `log`
//! facade, so hosts embedding the engine can install their own backend instead.

mod init;

pub use init::{init_logging, LoggingConfig};
