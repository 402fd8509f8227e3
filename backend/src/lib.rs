//! NASA Open APIs proxy backend

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Upstream client for NASA's Open APIs
pub mod nasa;

/// Inbound HTTP routes
pub mod routes;

/// Server construction and lifecycle
pub mod server;

/// Application state
pub mod state;

/// Shared types: environment configuration and error handling
pub mod types;
