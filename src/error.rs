//! Unified error types for the service.
//!
//! The handlers themselves cannot fail; every error here is a startup
//! failure surfaced before the server begins accepting requests.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bind address could not be parsed.
    #[error("bind address error: {0}")]
    Addr(#[from] std::net::AddrParseError),

    /// IO error while binding or serving.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
