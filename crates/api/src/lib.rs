//! # Waylog API
//!
//! HTTP service layer over the compliance engine.
//!
//! This crate contains:
//! - Axum routes (wire surface for log services and dispatch screens)
//! - Application context (scheduler wiring)
//! - Binary entry point and process setup
//!
//! ## Architecture
//! - Depends on `domain` and `core`
//! - Translates wire payloads into engine calls and back
//! - Owns process concerns: config, logging, graceful shutdown

pub mod config;
pub mod context;
pub mod error;
pub mod routes;

// Re-export for convenience
pub use config::ApiConfig;
pub use context::AppContext;
pub use error::ApiError;
pub use routes::build_router;
