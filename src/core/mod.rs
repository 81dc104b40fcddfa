//! Core utilities and common types for plugin-init.

pub mod error;

pub use error::{Error, Result};
