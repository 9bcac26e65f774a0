//! API request handlers.
//!
//! This module provides handlers for all API endpoints.

pub mod authors;
pub mod health;
pub mod quotes;
