use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use sort_test_compare::Strategy;
use sort_test_model::{SortRequest, SortResponse};
use tokio::net::TcpListener;

use crate::application::{ports::SortBackend, service::SortService};

pub const PROCESS_SINGLE: &str = "/process-single";
pub const PROCESS_CONCURRENT: &str = "/process-concurrent";
pub const HEALTH: &str = "/health";

/// Builds the dispatch table: one route per strategy plus a health probe.
///
/// Request bodies are not size capped, any well-formed batch reaches the
/// sorters.
pub fn router<B: SortBackend>(service: SortService<B>) -> Router {
    Router::new()
        .route(PROCESS_SINGLE, post(process_single::<B>))
        .route(PROCESS_CONCURRENT, post(process_concurrent::<B>))
        .route(HEALTH, get(health))
        .layer(DefaultBodyLimit::disable())
        .with_state(service)
}

/// Binds `addr` and serves until the process is killed.
pub async fn serve<B: SortBackend>(
    addr: std::net::SocketAddr,
    service: SortService<B>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service)).await?;
    Ok(())
}

async fn process_single<B: SortBackend>(
    State(service): State<SortService<B>>,
    body: Bytes,
) -> Result<Json<SortResponse>, ApiError> {
    process(&service, Strategy::Sequential, &body).await
}

async fn process_concurrent<B: SortBackend>(
    State(service): State<SortService<B>>,
    body: Bytes,
) -> Result<Json<SortResponse>, ApiError> {
    process(&service, Strategy::Concurrent, &body).await
}

// The body is decoded regardless of its content type; only its shape matters.
async fn process<B: SortBackend>(
    service: &SortService<B>,
    strategy: Strategy,
    body: &[u8],
) -> Result<Json<SortResponse>, ApiError> {
    let Json(request) = Json::<SortRequest>::from_bytes(body).map_err(ApiError::InvalidJson)?;
    let response = service
        .process(strategy, request.to_sort)
        .await
        .map_err(ApiError::Internal)?;
    Ok(Json(response))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// The body is not a `{"to_sort": [[int, ...], ...]}` object.
    InvalidJson(JsonRejection),
    /// The sorter itself failed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidJson(rejection) => {
                tracing::warn!(%rejection, "rejected request body");
                (StatusCode::BAD_REQUEST, "Invalid JSON").into_response()
            }
            Self::Internal(error) => {
                tracing::error!("sort failed: {error:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
