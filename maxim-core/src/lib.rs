//! # Maxim Core
//!
//! Domain layer for the maxim quote service.
//!
//! This crate provides:
//! - `Quote` and `QuoteResponse` record types
//! - `Dataset` loading and validation over the builtin quote table
//! - `QuoteCatalog` query operations (random, listing, author filter,
//!   keyword search, author enumeration)
//! - `QuoteError` error types
//!
//! No I/O, no async, no HTTP types: everything here is a pure function of
//! the in-memory dataset, so any number of concurrent readers can share a
//! catalog without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod quote;

pub use catalog::QuoteCatalog;
pub use dataset::{Dataset, QuoteSeed};
pub use error::{QuoteError, QuoteResult};
pub use quote::{Quote, QuoteResponse};
