//! HTTP API module for the introduction and echo endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
