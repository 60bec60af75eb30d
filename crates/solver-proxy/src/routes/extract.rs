use axum::{Json, body::Body, extract::State};

use crate::prompt::EXTRACT_PROMPT;
use crate::types::{ExtractRequest, ExtractResponse};

use super::error::{INVALID_JSON, RouteError};
use super::{AppState, read_body};

#[utoipa::path(
    post,
    path = "/api/extract",
    operation_id = "solver_extract",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Problem statement extracted from the screenshots", body = ExtractResponse),
        (status = 400, description = "Invalid JSON", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream model call failed", body = String, content_type = "text/plain"),
    ),
    tag = "solver",
)]
pub(crate) async fn extract(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<ExtractResponse>, RouteError> {
    tracing::info!("extract_request_received");

    let bytes = read_body(body).await.map_err(|e| {
        tracing::warn!(error = %e, "extract_body_read_failed");
        RouteError::BadRequest(INVALID_JSON.into())
    })?;

    // a bare `null` body decodes to an empty request
    let request = serde_json::from_slice::<Option<ExtractRequest>>(&bytes)
        .map_err(|e| {
            tracing::warn!(error = %e, "extract_invalid_json");
            RouteError::BadRequest(INVALID_JSON.into())
        })?
        .unwrap_or_default();

    let images = request.image_data_list.unwrap_or_default();
    tracing::info!(
        image_count = images.len(),
        language = request.language.as_deref().unwrap_or_default(),
        "extract_request_decoded"
    );

    let problem = state.client.complete(&images, EXTRACT_PROMPT).await?;

    tracing::info!(problem_len = problem.len(), "extract_succeeded");
    Ok(Json(ExtractResponse { problem }))
}
