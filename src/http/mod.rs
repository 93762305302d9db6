//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign/propagate request ID)
//!     → server.rs data handler → upstream client
//!     → response.rs (upstream failure → 500 JSON)
//!     → Send to client (CORS headers added)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{build_router, AppState, HttpServer, DATA_PATH};
