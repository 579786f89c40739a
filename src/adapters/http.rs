//! Axum web server exposing the verifier

use crate::adapters::assets;
use crate::adapters::dto::{ErrorBody, VerifyRequest, VerifyResponse};
use crate::core::checker::SquareChecker;
use crate::core::ConfigProvider;
use crate::utils::error::{self, ErrorCategory, MagicSquareError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state, read-only after startup
pub struct AppState {
    pub checker: SquareChecker,
    pub include_values: bool,
}

pub type SharedState = Arc<AppState>;

pub fn build_router<C: ConfigProvider>(config: &C) -> Router {
    let app_state = Arc::new(AppState {
        checker: SquareChecker::from_provider(config),
        include_values: config.include_values(),
    });

    Router::new()
        .route("/verificar", post(verify))
        .route("/api/verify", post(verify))
        .route("/api/health", get(health))
        .fallback(assets::static_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn bind(addr: &str) -> error::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| MagicSquareError::ServerError {
            message: format!("could not bind {}: {}", addr, e),
        })
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<C, F>(listener: TcpListener, config: &C, shutdown: F) -> error::Result<()>
where
    C: ConfigProvider,
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(config);

    let local_addr = listener
        .local_addr()
        .map_err(|e| MagicSquareError::ServerError {
            message: format!("listener has no local address: {}", e),
        })?;
    tracing::info!(
        "🚀 Listening on http://{} (locale: {}, max grid: {}x{})",
        local_addr,
        config.locale(),
        config.max_grid_size(),
        config.max_grid_size()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| MagicSquareError::ServerError {
            message: e.to_string(),
        })
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("🛑 Shutdown signal received");
}

/// POST /verificar - Checks a grid and returns the verdict
async fn verify(
    State(app): State<SharedState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, MagicSquareError> {
    let Json(request) = payload.map_err(|rejection| MagicSquareError::RequestError {
        message: rejection.body_text(),
    })?;

    let result = app.checker.check(&request.grid)?;
    Ok(Json(VerifyResponse::from_result(&result, app.include_values)))
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

impl MagicSquareError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RequestError { .. } | Self::SerializationError(_) => StatusCode::BAD_REQUEST,
            Self::MalformedGridError { .. } | Self::GridTooLargeError { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MagicSquareError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.category() != ErrorCategory::Input {
            tracing::error!("❌ Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.user_friendly_message(),
            suggestion: self.recovery_suggestion().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
