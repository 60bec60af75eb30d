use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hypr_openai_chat::Error as ChatError;

pub(crate) const INVALID_JSON: &str = "Invalid JSON";
pub(crate) const BODY_READ_FAILED: &str = "Failed to read request body";

#[derive(Debug)]
pub(crate) enum RouteError {
    BadRequest(String),
    Upstream(ChatError),
}

impl From<crate::types::QuestionError> for RouteError {
    fn from(e: crate::types::QuestionError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<ChatError> for RouteError {
    fn from(e: ChatError) -> Self {
        Self::Upstream(e)
    }
}

fn upstream_kind(e: &ChatError) -> &'static str {
    match e {
        ChatError::Transport(_) => "transport",
        ChatError::Malformed(_) => "malformed",
        ChatError::Encode(_) => "encode",
        ChatError::EmptyResponse => "empty",
        ChatError::Timeout(_) => "timeout",
        ChatError::InvalidApiKey(_) => "invalid_api_key",
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::BadRequest(m) => {
                tracing::warn!(detail = %m, "route_error_bad_request");
                (StatusCode::BAD_REQUEST, m)
            }
            Self::Upstream(e) => {
                let kind = upstream_kind(&e);
                sentry::configure_scope(|scope| {
                    scope.set_tag("upstream.error", kind);
                });
                // the sentry tracing layer turns this into the one reported event
                tracing::error!(error = %e, kind = kind, "route_error_upstream");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, msg).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (RouteError::BadRequest(INVALID_JSON.into()), StatusCode::BAD_REQUEST),
            (RouteError::Upstream(ChatError::EmptyResponse), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn upstream_failure_reported_once_with_kind_tag() {
        use tracing_subscriber::layer::SubscriberExt;

        let subscriber =
            tracing_subscriber::registry().with(sentry::integrations::tracing::layer());

        let events = tracing::subscriber::with_default(subscriber, || {
            sentry::test::with_captured_events(|| {
                let _ = RouteError::Upstream(ChatError::EmptyResponse).into_response();
                let _ = RouteError::BadRequest(INVALID_JSON.into()).into_response();
            })
        });

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].tags.get("upstream.error").map(String::as_str),
            Some("empty")
        );
    }
}
