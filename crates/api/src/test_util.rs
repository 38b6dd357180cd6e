//! Shared helpers for in-crate tests.

use std::time::Duration;

use axum::Router;
use secrecy::SecretString;
use sqlx::postgres::PgPoolOptions;

use crate::config::ApiConfig;
use crate::routes;
use crate::state::AppState;

/// Build the API router over a pool that never connects.
///
/// Handlers that validate before querying return their error without
/// touching the database; anything that does reach the pool fails with a
/// connection error, which tests treat as proof a query was issued.
#[allow(clippy::expect_used)]
pub fn app() -> Router {
    let config = ApiConfig {
        database_url: SecretString::from("postgres://localhost:1/studyspot_test"),
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        sentry_dsn: None,
    };

    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy("postgres://localhost:1/studyspot_test")
        .expect("lazy pool");

    routes::routes().with_state(AppState::new(config, pool))
}
