//! Configuration module for Ferrous Tunnel
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `logging`: Logging settings
//! - `telemetry`: Event sink and HTTP metric switches
//! - `history`: In-memory transaction history
//! - `errors`: Configuration errors

pub mod errors;
pub mod history;
pub mod logging;
pub mod root;
pub mod telemetry;

pub use errors::ConfigError;
pub use history::HistoryConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use telemetry::TelemetryConfig;
