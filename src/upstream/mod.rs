//! Upstream API access.
//!
//! # Data Flow
//! ```text
//! GET /api/data handler
//!     → client.rs (one outbound GET, no retries)
//!     → error.rs (classify transport / status / decode failures)
//!     → serde_json::Value relayed as-is
//! ```

pub mod client;
pub mod error;

pub use client::UpstreamClient;
pub use error::UpstreamError;
