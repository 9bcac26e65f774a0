//! # Maxim API
//!
//! REST API for the maxim quote service.
//!
//! This crate provides:
//! - Route definitions for the five quote endpoints plus a health check
//! - Request handlers over the shared [`maxim_core::QuoteCatalog`]
//! - Typed API errors with localized not-found messages
//! - Server configuration and the axum server runner
//!
//! # Architecture
//!
//! The API layer is built on Axum and provides:
//! - `/` - One random quote with the total count
//! - `/quotes` - Full quote listing
//! - `/quotes/author/{author}` - Quotes by a single author
//! - `/quotes/search?keyword=` - Keyword search across all fields
//! - `/authors` - Distinct author names
//! - `/health` - Health check
//!
//! The catalog is immutable after startup, so handlers share it through
//! `Arc<AppState>` without any locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use server::ApiServer;
pub use state::AppState;
