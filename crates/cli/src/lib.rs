//! Support code for the `othello` binary: config, logging and engine lookup.

pub mod config;
pub mod engines;
pub mod error;
pub mod logging;

pub use config::{AppConfig, LogConfig, MatchSettings};
pub use engines::create_engine;
pub use error::ConfigError;
