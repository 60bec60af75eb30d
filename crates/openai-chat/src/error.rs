use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed upstream response: {0}")]
    Malformed(serde_json::Error),

    #[error("failed to encode upstream request: {0}")]
    Encode(serde_json::Error),

    #[error("no response from upstream model")]
    EmptyResponse,

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid api key: {0}")]
    InvalidApiKey(String),
}
