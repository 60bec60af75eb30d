pub(crate) mod error;
pub(crate) mod extract;
pub(crate) mod generate;

use axum::{Router, body::Body, routing::post};
use hypr_openai_chat::{ChatClient, ChatConfig};

/// Request bodies carry base64 screenshots, so the cap sits well above axum's default.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) client: ChatClient,
}

pub fn router(config: ChatConfig) -> Result<Router, hypr_openai_chat::Error> {
    let state = AppState {
        client: ChatClient::new(config)?,
    };

    tracing::info!(
        api_base = %state.client.config().api_base,
        text_model = %state.client.config().models.text,
        vision_model = %state.client.config().models.vision,
        timeout_secs = state.client.config().timeout.as_secs(),
        "solver_router_configured"
    );

    let router = Router::new()
        .route("/extract", post(extract::extract))
        .route("/generate", post(generate::generate))
        .with_state(state);

    Ok(router)
}

pub(crate) async fn read_body(body: Body) -> Result<axum::body::Bytes, axum::Error> {
    axum::body::to_bytes(body, MAX_BODY_BYTES).await
}
