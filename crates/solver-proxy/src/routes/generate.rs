use axum::{Json, body::Body, extract::State};
use serde_json::{Map, Value};

use crate::language::Language;
use crate::prompt::generate_prompt;
use crate::solution::split_solution;
use crate::types::{GenerateRequest, GenerateResponse, validate_question};

use super::error::{BODY_READ_FAILED, INVALID_JSON, RouteError};
use super::{AppState, read_body};

const QUESTION_LOG_CHARS: usize = 60;

#[utoipa::path(
    post,
    path = "/api/generate",
    operation_id = "solver_generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated solution split into code and explanation", body = GenerateResponse),
        (status = 400, description = "Unreadable body, invalid JSON, or missing/blank question", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream model call failed", body = String, content_type = "text/plain"),
    ),
    tag = "solver",
)]
pub(crate) async fn generate(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<GenerateResponse>, RouteError> {
    tracing::info!("generate_request_received");

    let bytes = read_body(body).await.map_err(|e| {
        tracing::warn!(error = %e, "generate_body_read_failed");
        RouteError::BadRequest(BODY_READ_FAILED.into())
    })?;

    let payload = parse_object(&bytes)?;
    let question = validate_question(&payload)?;
    let language = Language::from_payload(payload.get("language"));

    tracing::info!(
        question = %question.chars().take(QUESTION_LOG_CHARS).collect::<String>(),
        language = %language,
        "generate_request_decoded"
    );

    let text = state
        .client
        .complete(&[], &generate_prompt(question, language))
        .await?;

    let solution = split_solution(&text);
    tracing::info!(
        code_len = solution.code.len(),
        has_explanation = !solution.explanation.is_empty(),
        "generate_succeeded"
    );

    Ok(Json(GenerateResponse {
        code: solution.code,
        explanation: solution.explanation,
    }))
}

/// A JSON `null` body reads as an empty object, so it fails on the missing question instead.
fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, RouteError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Ok(Map::new()),
        Ok(other) => {
            tracing::warn!(kind = %json_kind(&other), "generate_body_not_an_object");
            Err(RouteError::BadRequest(INVALID_JSON.into()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "generate_invalid_json");
            Err(RouteError::BadRequest(INVALID_JSON.into()))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_accepts_objects_and_null() {
        assert!(parse_object(br#"{"question": "q"}"#).unwrap().contains_key("question"));
        assert!(parse_object(b"null").unwrap().is_empty());
    }

    #[test]
    fn parse_object_rejects_everything_else() {
        let bodies: [&[u8]; 5] = [b"[1, 2]", b"\"q\"", b"42", b"{", b""];
        for body in bodies {
            assert!(parse_object(body).is_err(), "{}", String::from_utf8_lossy(body));
        }
    }
}
