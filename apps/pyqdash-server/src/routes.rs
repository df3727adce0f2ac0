//! Router and handlers for the dashboard API.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use pyqdash_core::dataset::DatasetCache;

/// Server state shared across handlers.
pub struct AppState {
    cache: Mutex<DatasetCache>,
}

impl AppState {
    #[must_use]
    pub fn new(cache: DatasetCache) -> Self {
        Self {
            cache: Mutex::new(cache),
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Create the API router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/chapters", get(api_chapters))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    "OK"
}

/// GET /api/chapters
///
/// 200 with the full chapter array on success. Any load or parse failure
/// collapses to a 500 with a fixed error body; the cause goes to the log,
/// never to the client.
async fn api_chapters(State(state): State<SharedState>) -> Response {
    // The dataset read is blocking file I/O; keep it off the async workers.
    let loaded = tokio::task::spawn_blocking(move || {
        let mut cache = state
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        cache.get()
    })
    .await;

    match loaded {
        Ok(Ok(chapters)) => Json(chapters.as_ref().clone()).into_response(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Error reading chapter data");
            load_failure()
        }
        Err(e) => {
            tracing::error!(error = %e, "Dataset load task failed");
            load_failure()
        }
    }
}

fn load_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to load chapter data" })),
    )
        .into_response()
}
