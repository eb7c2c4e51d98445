//! Shared types, errors, and configuration for Dheeto.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for backend-assigned entity references
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{ApiConfig, AppConfig};
pub use error::{AppError, AppResult};
