//! Catalog API library.
//!
//! Item, user, model and upload endpoints over an in-memory catalog, with
//! validated request binding and uniform JSON error bodies.

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod security;

pub use config::ApiConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
