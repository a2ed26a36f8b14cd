//! # HTTP Server Module
//!
//! Axum server for the shows API. Every response body is an [`Envelope`].
//!
//! # Endpoints
//!
//! - `/` - Greeting
//! - `/mirror/:name` - Echo a path segment
//! - `/health` - Health check
//! - `/shows`, `/shows/:id` - Show CRUD

pub mod config;
pub mod envelope;
pub mod errors;
pub mod root_routes;
pub mod server;
pub mod show_routes;

pub use config::{HttpServerConfig, InvalidCorsOrigin};
pub use envelope::{Envelope, EnvelopeError, EnvelopeResult};
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
pub use show_routes::ShowsState;
