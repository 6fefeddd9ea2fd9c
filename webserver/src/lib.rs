//! Webserver library for the Jewel India marketplace
//!
//! Serves the static catalog (states, sellers, workshops, jewelry and the
//! seller dashboard fixtures) as a JSON API, with query-string filtering
//! backed by the shared filter pipeline.

pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{Args, ServerConfig};
pub use error::{WebServerError, WebServerResult};
pub use state::{ApiState, WebServerState};
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::CatalogStore;

// Re-export service implementations
pub use services::MemoryStore;
