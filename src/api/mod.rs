//! HTTP API: router, shared state, and server lifecycle.
//!
//! Handlers hold no state between requests. Everything they need (pool,
//! config, the notion of "today") lives in [`AppState`].

use std::sync::Arc;

use axum::middleware;
use axum::routing::{delete, get, put};
use axum::Router;
use chrono::NaiveDate;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::GlobalConfig;
use crate::persistence::db::Database;
use crate::{AppError, Result};

pub mod error;
pub mod habits;
pub mod layers;
pub mod sleep;
pub mod tasks;

/// Source of the current calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The server's local date.
    Local,
    /// A pinned date, for tests and replays.
    Fixed(NaiveDate),
}

impl Clock {
    /// Today's date according to this clock.
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self {
            Self::Local => chrono::Local::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }
}

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<GlobalConfig>,
    /// Connection pool, opened once at startup.
    pub db: Arc<Database>,
    /// Date source for task creation and sleep logging.
    pub clock: Clock,
}

impl AppState {
    /// Build state using the local clock.
    #[must_use]
    pub fn new(config: Arc<GlobalConfig>, db: Arc<Database>) -> Self {
        Self {
            config,
            db,
            clock: Clock::Local,
        }
    }
}

/// Handler for `GET /health`. Returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Build the application router with CORS and request logging applied.
#[must_use]
pub fn router(state: AppState) -> Router {
    let cors = state.config.cors.clone();

    Router::new()
        .route("/health", get(health))
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/{id}", put(tasks::update).delete(tasks::remove))
        .route("/habits", get(habits::list).post(habits::create))
        .route("/habits/{id}", delete(habits::remove))
        .route("/habits/{id}/toggle/{day}", put(habits::toggle))
        .route("/sleep", get(sleep::window).post(sleep::log))
        .with_state(state)
        .layer(middleware::from_fn_with_state(cors, layers::cors))
        .layer(middleware::from_fn(layers::log_request))
}

/// Bind `http_host:http_port` and serve until `ct` is cancelled.
///
/// # Errors
///
/// Returns `AppError::Config` if the address cannot be bound.
pub async fn serve(state: AppState, ct: CancellationToken) -> Result<()> {
    let bind = format!("{}:{}", state.config.http_host, state.config.http_port);
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|err| AppError::Config(format!("failed to bind HTTP on {bind}: {err}")))?;
    serve_listener(listener, state, ct).await
}

/// Serve the API on an already-bound listener until `ct` is cancelled.
///
/// # Errors
///
/// Returns `AppError::Io` if the server fails while running.
pub async fn serve_listener(
    listener: TcpListener,
    state: AppState,
    ct: CancellationToken,
) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "starting HTTP API");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { ct.cancelled().await })
        .await
        .map_err(|err| AppError::Io(format!("HTTP server error: {err}")))?;

    info!("HTTP API shut down");
    Ok(())
}
