#![forbid(unsafe_code)]

//! HTTP boundary for `linkpath-core`.
//!
//! Exposes `POST /get-edge-path`, `POST /get-edge-paths` and the `/` + `/health` status
//! endpoints, with CORS, timeout, panic-to-500 and request tracing layers.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, Error, Result};

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Crates that are too chatty at `info`/`debug` for a service log.
const LOUD_CRATES: [&str; 2] = ["hyper", "h2"];

/// Installs a `tracing` subscriber that logs to stdout.
///
/// Uses `RUST_LOG` when set (default `info`), and quiets [`LOUD_CRATES`] unless `RUST_LOG`
/// mentions them explicitly.
pub fn setup_logging() {
    let mut filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    for loud_crate in LOUD_CRATES {
        if !filter.contains(&format!("{loud_crate}=")) {
            filter += &format!(",{loud_crate}=warn");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

fn cors_layer(config: &ServerConfig) -> std::result::Result<CorsLayer, ConfigError> {
    // Credentials cannot be combined with a literal `*`, so a wildcard mirrors the caller.
    let allow_origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin {
                    origin: origin.clone(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Wraps `routes` with the service middleware stack.
pub fn with_layers(
    routes: Router,
    config: &ServerConfig,
) -> std::result::Result<Router, ConfigError> {
    let cors = cors_layer(config)?;
    let timeout =
        TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout());

    Ok(routes
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub fn router(config: &ServerConfig) -> std::result::Result<Router, ConfigError> {
    with_layers(routes::api_routes(), config)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Binds `config.host:config.port` and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let app = router(&config)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        origins = ?config.allowed_origins,
        "linkpath listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
