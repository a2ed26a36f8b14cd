//! shows-api - a small JSON API over an in-memory mock datastore
//!
//! Requests are validated, delegated to a [`store::MockStore`] and answered
//! with a uniform [`http_server::Envelope`].

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod shows;
pub mod store;
