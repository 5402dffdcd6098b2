//! Shared helpers for HTTP-level integration tests.
//!
//! Each test gets its own in-memory database and a server bound to an
//! ephemeral port.

use std::sync::Arc;

use chrono::NaiveDate;
use kronix::api::{serve_listener, AppState, Clock};
use kronix::config::GlobalConfig;
use kronix::persistence::db::{self, Database};
use tokio_util::sync::CancellationToken;

/// A running server plus the handles a test needs to inspect and stop it.
pub struct TestApp {
    pub base_url: String,
    pub db: Arc<Database>,
    pub client: reqwest::Client,
    ct: CancellationToken,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.ct.cancel();
    }
}

/// Spawn the API with default config and the local clock.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(GlobalConfig::default(), Clock::Local).await
}

/// Spawn the API with "today" pinned to `today`.
pub async fn spawn_app_on(today: NaiveDate) -> TestApp {
    spawn_app_with(GlobalConfig::default(), Clock::Fixed(today)).await
}

pub async fn spawn_app_with(config: GlobalConfig, clock: Clock) -> TestApp {
    let db = Arc::new(db::connect_memory().await.expect("db"));
    let state = AppState {
        config: Arc::new(config),
        db: Arc::clone(&db),
        clock,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral");
    let port = listener.local_addr().expect("local addr").port();

    let ct = CancellationToken::new();
    let server_ct = ct.clone();
    tokio::spawn(async move {
        let _ = serve_listener(listener, state, server_ct).await;
    });

    TestApp {
        base_url: format!("http://127.0.0.1:{port}"),
        db,
        client: reqwest::Client::new(),
        ct,
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}
