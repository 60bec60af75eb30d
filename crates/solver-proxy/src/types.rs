use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

use crate::language::Language;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    /// Base64-encoded PNG screenshots, forwarded in order.
    #[serde(default)]
    pub image_data_list: Option<Vec<String>>,
    /// Accepted for client compatibility; the extraction prompt does not use it.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractResponse {
    pub problem: String,
}

/// Documents the generate body. The handler validates the raw JSON object
/// itself so that each failure gets its own message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    pub question: String,
    #[serde(default)]
    pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub code: String,
    pub explanation: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Missing 'question' field")]
    Missing,
    #[error("'question' must be a non-empty string")]
    Invalid,
}

/// Returns the question as sent (untrimmed) once it is known to be a non-blank string.
pub fn validate_question(payload: &Map<String, Value>) -> Result<&str, QuestionError> {
    match payload.get("question") {
        None | Some(Value::Null) => Err(QuestionError::Missing),
        Some(Value::String(question)) if !question.trim().is_empty() => Ok(question.as_str()),
        Some(_) => Err(QuestionError::Invalid),
    }
}
