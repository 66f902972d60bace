//! HTTP front end (`with-server` feature).
//!
//! `POST /validate-email` takes `{"email": "..."}` and answers with
//! `{"email": ..., "result": VerificationReport}`; `400` when the address is
//! missing. Each request runs its own verification; nothing is shared between
//! requests except the read-only resolver.

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::ServerError;
pub use handlers::{ValidateRequest, ValidateResponse};

use crate::mx::LookupMx;
use crate::verify::{MailboxProbe, Verifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    /// Upper bound for a whole request, DNS and SMTP included.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
            request_timeout: Duration::from_secs(30),
        }
    }
}

pub fn router<R, P>(verifier: Arc<Verifier<R, P>>, request_timeout: Duration) -> Router
where
    R: LookupMx + 'static,
    P: MailboxProbe + 'static,
{
    Router::new()
        .route("/", get(handlers::index))
        .route("/validate-email", post(handlers::validate_email::<R, P>))
        .with_state(verifier)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.listen` and serves until Ctrl-C.
pub async fn serve<R, P>(config: ServerConfig, verifier: Verifier<R, P>) -> Result<(), ServerError>
where
    R: LookupMx + 'static,
    P: MailboxProbe + 'static,
{
    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| ServerError::Bind {
            address: config.listen,
            source,
        })?;
    tracing::info!(address = %config.listen, "email validation server running");

    let app = router(Arc::new(verifier), config.request_timeout);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServerError::Serve { source })?;

    tracing::info!("email validation server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests;
