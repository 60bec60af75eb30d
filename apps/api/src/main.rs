mod env;

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{ConnectInfo, Request},
    routing::get,
};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::env::Env;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry::integrations::tracing::layer())
        .init();

    let env = Env::from_env().context("failed to load environment (is OPENAI_API_KEY set?)")?;

    let _sentry = env.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?
        .block_on(serve(env))
}

async fn serve(env: Env) -> anyhow::Result<()> {
    let port = env.port()?;
    let router = app(&env)?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "server_listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server_stopped");
    Ok(())
}

fn app(env: &Env) -> anyhow::Result<Router> {
    let solver =
        hypr_solver_proxy::router(env.chat_config()).context("failed to build solver router")?;

    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            let remote_addr = request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr);
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                remote_addr = ?remote_addr,
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/openapi.json", get(openapi_json))
        .nest("/api", solver)
        .layer(trace);

    Ok(router)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(hypr_solver_proxy::openapi())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl_c_handler_failed");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown_signal_received");
}
