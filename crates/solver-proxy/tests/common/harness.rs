#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use hypr_openai_chat::ChatCompletionRequest;
use solver_proxy::{ChatConfig, router};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestHarness {
    pub mock_server: MockServer,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self {
            mock_server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> ChatConfig {
        ChatConfig::new("test-api-key").with_api_base(self.mock_server.uri())
    }

    pub fn app(&self) -> axum::Router {
        router(self.config()).unwrap()
    }

    pub fn app_with_timeout(&self, timeout: Duration) -> axum::Router {
        router(self.config().with_timeout(timeout)).unwrap()
    }

    pub async fn mount_completion(&self, content: &str) {
        self.mount_json_response(200, completion_response(content))
            .await;
    }

    pub async fn mount_json_response(&self, status: u16, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-api-key"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(&response)
                    .insert_header("Content-Type", "application/json"),
            )
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_delayed_completion(&self, content: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_response(content))
                    .set_delay(delay),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// Fails the test on drop if any request reaches the upstream.
    pub async fn expect_no_upstream_call(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn upstream_requests(&self) -> Vec<ChatCompletionRequest> {
        self.mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub fn completion_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 1}
    })
}

pub fn build_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    build_request(uri, serde_json::to_string(&body).unwrap())
}

pub async fn response_to_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

pub async fn response_to_string(response: axum::http::Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body_bytes).to_string()
}
