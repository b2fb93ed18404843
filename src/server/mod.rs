//! HTTP transport
//!
//! Routes requests to the evaluator and serializes its verdict.

mod handlers;
mod telemetry;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ServerError;

pub use handlers::{index, validate_body, validate_query, BANNER};
pub use telemetry::init_tracing;

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/validar-senha", post(validate_body))
        .route("/teste-senha", get(validate_query))
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until `shutdown` is cancelled.
pub async fn serve(config: &Config, shutdown: CancellationToken) -> Result<(), ServerError> {
    let addr = config.socket_addr().await?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "servidor rodando na porta {}", config.port);

    serve_listener(listener, shutdown).await
}

/// Serves on an already bound listener until `shutdown` is cancelled.
///
/// In-flight requests are drained before returning.
pub async fn serve_listener(
    listener: TcpListener,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    axum::serve(listener, router())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    Ok(())
}

/// Cancels `token` on SIGINT or SIGTERM.
pub async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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

    tracing::info!("shutdown signal received, initiating graceful shutdown");
    token.cancel();
}
