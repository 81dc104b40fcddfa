//! Monitoring Module
//!
//! Logging setup for applications embedding the plugin lifecycle.

pub mod logging;

pub use logging::{init_tracing, LogFormat, LogLevel, LoggingConfig};
