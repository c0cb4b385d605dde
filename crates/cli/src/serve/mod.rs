//! `onroad serve` -- HTTP JSON API for the quotation engine.
//!
//! Exposes the pricing library as an async HTTP service using `axum` +
//! `tokio`. Every calculation is a pure function over `'static` tables, so
//! handlers run concurrently with no shared mutable state.
//!
//! Request hygiene:
//! - permissive CORS on every response (local-dev posture)
//! - per-IP fixed-window rate limiting, ONROAD_RATE_LIMIT overrides the default
//! - optional API key check when ONROAD_API_KEY is set
//!
//! Routes:
//! - GET  /health                  - Server status (exempt from auth)
//! - POST /pricing/on-road         - On-road price breakdown for one vehicle
//! - POST /pricing/on-road/batch   - Breakdowns for a list of vehicles
//! - POST /pricing/emi             - EMI quote, optionally with amortization
//! - GET  /pricing/states          - Registration tax catalog per state
//! - GET  /pricing/cities          - City search and popular-city list
//!
//! Every response body is JSON.

mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use self::handlers::{
    handle_cities, handle_emi, handle_health, handle_not_found, handle_on_road,
    handle_on_road_batch, handle_states,
};
use self::middleware::{auth_middleware, rate_limit_middleware};
use self::state::{AppState, RateLimiter};

/// Request bodies above 1 MB are rejected before they reach a handler.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// A batch request may quote at most this many vehicles.
const MAX_BATCH_ITEMS: usize = 100;

/// Requests per window allowed when ONROAD_RATE_LIMIT is unset.
const DEFAULT_RATE_LIMIT: u64 = 60;

/// Length of the fixed rate-limit window.
const RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Build an error payload of the shape `{"error": "..."}`.
fn json_error(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": message })))
}

/// Start the HTTP server on the given port.
///
/// With both TLS paths present (and the `tls` feature compiled in) the
/// server speaks HTTPS through `axum-server`/rustls; otherwise plain HTTP.
/// When `ONROAD_API_KEY` is set every route except /health demands the key.
pub async fn start_server(
    port: u16,
    _tls_cert: Option<PathBuf>,
    _tls_key: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    // An unparseable ONROAD_RATE_LIMIT falls back to the default.
    let rate_limit = match std::env::var("ONROAD_RATE_LIMIT") {
        Ok(v) => v.parse::<u64>().unwrap_or(DEFAULT_RATE_LIMIT),
        Err(_) => DEFAULT_RATE_LIMIT,
    };

    // An empty ONROAD_API_KEY counts as no key at all.
    let api_key = std::env::var("ONROAD_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());

    eprintln!("Rate limit: {}/min per client IP", rate_limit);
    if api_key.is_some() {
        eprintln!("API key required (ONROAD_API_KEY is set)");
    }

    let state = Arc::new(AppState {
        rate_limiter: RateLimiter::new(rate_limit),
        api_key,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/pricing/on-road", post(handle_on_road))
        .route("/pricing/on-road/batch", post(handle_on_road_batch))
        .route("/pricing/emi", post(handle_emi))
        .route("/pricing/states", get(handle_states))
        .route("/pricing/cities", get(handle_cities))
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // TLS path: axum-server + rustls, compiled in via the `tls` feature.
    #[cfg(feature = "tls")]
    if let (Some(cert), Some(key)) = (&_tls_cert, &_tls_key) {
        let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert, key).await?;
        eprintln!("On-road pricing API listening on https://{}", addr);
        axum_server::bind_rustls(addr, tls)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await?;
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("On-road pricing API listening on http://{}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    eprintln!("\nServer stopped.");
    Ok(())
}

/// Resolves once Ctrl+C arrives, letting axum drain in-flight requests.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for Ctrl+C");
    eprintln!("\nShutting down...");
}
