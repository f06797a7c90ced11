//! Document analysis endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use legalai_common::api::AnalyzeRequest;
use legalai_common::AnalysisResult;
use tracing::info;

use crate::{ApiError, ApiResult, AppState};

/// POST /api/analyze
///
/// **Request:** `{"documentText": "..."}`
/// **Response:** the `AnalysisResult` JSON
///
/// **Errors:**
/// - 400: missing, null, empty or whitespace-only document text; unreadable body
/// - 500: API key not configured, upstream error, empty or malformed model reply
pub async fn analyze_document(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(payload) = payload?;

    if payload.document_text.trim().is_empty() {
        return Err(ApiError::BadRequest("Document text is required".to_string()));
    }

    info!(chars = payload.document_text.len(), "Analysis requested");

    let analysis = state.gateway.analyze_document(&payload.document_text).await?;

    Ok(Json(analysis))
}

pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/api/analyze", post(analyze_document))
}
