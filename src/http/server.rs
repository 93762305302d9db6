//! HTTP server setup and the data route.
//!
//! # Responsibilities
//! - Create the Axum Router with the single `GET /api/data` handler
//! - Wire up middleware (CORS, request ID, tracing)
//! - Relay the upstream document or map the failure to a 500
//! - Serve on a bound listener until shutdown

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ProxyConfig;
use crate::http::request::{
    propagate_request_id_layer, request_id, set_request_id_layer,
};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Path of the relayed resource.
pub const DATA_PATH: &str = "/api/data";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config.upstream)?;

        tracing::info!(
            upstream = %upstream.url(),
            timeout_secs = ?config.upstream.timeout_secs,
            "Upstream client ready"
        );

        let router = build_router(AppState::new(upstream));
        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layers also wrap the fallback, so unmatched paths get the default 404
/// with CORS and request-id headers attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(DATA_PATH, get(data_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                request_id = %request_id(req.headers()),
            )
        }))
        .layer(set_request_id_layer())
}

/// Fetch the upstream document and relay it.
async fn data_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    tracing::debug!(
        request_id = %request_id,
        upstream = %state.upstream.url(),
        "Fetching upstream"
    );

    match state.upstream.fetch().await {
        Ok(body) => {
            metrics::record_request(method.as_str(), 200, "ok", start_time);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            let kind = e.kind();
            tracing::error!(request_id = %request_id, kind, error = %e, "Upstream error");

            let response = e.into_response();
            metrics::record_request(method.as_str(), response.status().as_u16(), kind, start_time);
            response
        }
    }
}
