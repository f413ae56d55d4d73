//! HTTP routes: style listing and batch generation

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::catalog::StyleProfile;
use crate::encoding::{self, ReferenceImage};
use crate::error::{AppError, Result};
use crate::orchestrator::GenerationResult;
use crate::AppState;

/// Request body for `POST /v1/generations`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    pub prompt: String,
    pub style_ids: Vec<String>,
    #[serde(default)]
    pub reference_image: Option<ReferenceImagePayload>,
}

/// Reference image carried as base64 (bare or data URL) plus MIME type
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImagePayload {
    pub data: String,
    pub mime_type: String,
}

/// Response body for `POST /v1/generations`
///
/// Only the successful subset is exposed; per-style failure detail stays
/// internal, surfaced as a count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponseBody {
    pub batch_id: Uuid,
    pub results: Vec<GenerationResult>,
    pub failed_count: usize,
}

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/styles", get(list_styles))
        .route("/v1/generations", post(generate))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_styles(State(state): State<Arc<AppState>>) -> Json<Vec<StyleProfile>> {
    Json(state.catalog.all().to_vec())
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<GenerateResponseBody>> {
    if body.prompt.trim().is_empty() {
        return Err(AppError::InvalidRequest("Prompt cannot be empty".to_string()));
    }
    if body.style_ids.is_empty() {
        return Err(AppError::InvalidRequest(
            "Select at least one style".to_string(),
        ));
    }

    let reference = match body.reference_image {
        Some(payload) => {
            let data = encoding::decode(&payload.data)?;
            Some(ReferenceImage::new(data, payload.mime_type))
        }
        None => None,
    };

    let outcome = state
        .orchestrator
        .generate_all(&body.style_ids, body.prompt.trim(), reference)
        .await?;

    Ok(Json(GenerateResponseBody {
        batch_id: outcome.batch_id,
        failed_count: outcome.failed_count(),
        results: outcome.results,
    }))
}
