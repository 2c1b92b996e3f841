//! Logging utilities.
//!
//! Library code only talks to the `log` facade; this module is for binaries
//! and test harnesses that want `env_logger` output without wiring it up.

mod init;

pub use init::{init_logging, LoggingConfig};
