use crate::error::ApiError;
use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use linkpath_core::{EdgePathRequest, EdgePathResponse, compute_edge_path, compute_edge_paths};
use serde::Serialize;

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const GET_EDGE_PATH: &str = "/get-edge-path";
pub const GET_EDGE_PATHS: &str = "/get-edge-paths";

pub const SERVICE_NAME: &str = "linkpath edge path API";

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub get_edge_path: &'static str,
    pub get_edge_paths: &'static str,
    pub health: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

pub fn api_routes() -> Router {
    Router::new()
        .route(ROOT, get(root))
        .route(HEALTH, get(health))
        .route(GET_EDGE_PATH, post(get_edge_path))
        .route(GET_EDGE_PATHS, post(get_edge_paths))
}

async fn root() -> Json<Liveness> {
    Json(Liveness {
        message: "linkpath API is running",
        status: "healthy",
    })
}

async fn health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            get_edge_path: GET_EDGE_PATH,
            get_edge_paths: GET_EDGE_PATHS,
            health: HEALTH,
        },
    })
}

async fn get_edge_path(
    payload: Result<Json<EdgePathRequest>, JsonRejection>,
) -> Result<Json<EdgePathResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(edge_type = %request.edge_type, "computing edge path");
    Ok(Json(compute_edge_path(&request)?))
}

async fn get_edge_paths(
    payload: Result<Json<Vec<EdgePathRequest>>, JsonRejection>,
) -> Result<Json<Vec<EdgePathResponse>>, ApiError> {
    let Json(requests) = payload?;
    Ok(Json(compute_edge_paths(&requests)?))
}
