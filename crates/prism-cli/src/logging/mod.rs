//! Logger setup for the `prism` binary.
//!
//! The library crate only talks to the `log` facade; the backend is chosen here.

mod init;

pub use init::{init_logging, LoggingConfig};
