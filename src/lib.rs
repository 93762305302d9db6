//! Single-route JSON relay: `GET /api/data` fetches a fixed upstream API
//! and returns its JSON unchanged, or `500 {"error": ...}` on failure.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::{UpstreamClient, UpstreamError};
