//! HTTP surface.
//!
//! | Route               | Response                                         |
//! |---------------------|--------------------------------------------------|
//! | `GET /`             | welcome text                                     |
//! | `GET /health`       | liveness text                                    |
//! | `GET /{date}`       | 200 JSON grid, 400 validation message, 500 text  |
//! | `GET /date/{date}`  | same as `/{date}`                                |

use std::any::Any;
use std::future::Future;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::{CalendarGrid, InvalidDateFormat, build};

pub const WELCOME_MESSAGE: &str =
    "Welcome to Calendar App. Please visit url: 'hostname:port/date' to try it.";
pub const HEALTH_MESSAGE: &str = "Calendar App alive.";
/// Body of every 500 response. Internal details stay in the logs.
pub const SERVER_ERROR_MESSAGE: &str = "Server side issue";

/// Failure of a request, rendered as a plain-text response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateFormat),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidDate(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            Self::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

/// Builds the application router with tracing and panic recovery.
pub fn router() -> Router {
    with_layers(
        Router::new()
            .route("/", get(home))
            .route("/health", get(health))
            .route("/{date}", get(date_matrix))
            .route("/date/{date}", get(date_matrix)),
    )
}

fn with_layers(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(recover_from_panic))
        .layer(TraceLayer::new_for_http())
}

/// Serves [`router`] on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns the I/O error that stopped the server.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("HTTP server bound on {}", addr);
    }
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
}

async fn home() -> &'static str {
    debug!("home endpoint called");
    WELCOME_MESSAGE
}

async fn health() -> &'static str {
    debug!("health endpoint called");
    HEALTH_MESSAGE
}

async fn date_matrix(Path(date): Path<String>) -> Result<Json<CalendarGrid>, ApiError> {
    info!(%date, "date matrix requested");
    let grid = build(&date).inspect_err(|e| info!(%date, error = %e, "date validation failed"))?;
    Ok(Json(grid))
}

fn recover_from_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(detail, "server side error while handling request");
    ApiError::Internal(detail.to_owned()).into_response()
}
