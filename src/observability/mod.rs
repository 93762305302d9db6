//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers & middleware
//!     → logging.rs (structured log events, request id in span)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
