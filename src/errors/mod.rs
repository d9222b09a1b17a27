//! Centralized error handling for the company directory service
//!
//! This module provides the error types used across the application layers
//! and the conversions between them.
//!
//! # Error Categories
//!
//! - **HTTP Errors**: transport failures from the backend HTTP client
//! - **External Service Errors**: backend responses that are not usable
//! - **Configuration Errors**: invalid or unreadable configuration

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
