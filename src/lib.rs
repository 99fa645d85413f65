//! Tiny introduction + echo JSON service.
//!
//! Two read-only endpoints, no state:
//!
//! ```text
//! GET /        -> {"name": "Smeet", "Location": "Dehradun"}
//! GET /{data}  -> {"hi": "<data>", "Location": "Dehradun"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
