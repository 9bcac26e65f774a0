//! # Maxim Server
//!
//! Server binary support for the maxim quote service: configuration file
//! loading and signal-driven graceful shutdown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod shutdown;

pub use config::{ConfigError, LoggingConfig, ServerConfig};
