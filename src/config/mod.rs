//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (paths, timeouts, limits)
//! - CLI option types and parsing
//! - Library configuration structs for the server and batch runs

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{BatchOptions, Cli, Command, LogFormat, LogLevel, ResolverArgs, ServerConfig};
