//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Liveness check
//! GET    /health/ready           - Readiness check (database ping)
//!
//! # Cafes
//! GET    /cafes                  - Cafe listing, optional city/preferences filters
//! GET    /cafes/{id}             - Cafe detail
//! POST   /cafes                  - Create cafe
//!
//! # Users
//! GET    /users                  - User listing
//! GET    /users/{id}             - User detail
//! POST   /users                  - Create user
//!
//! # Favorites
//! GET    /users/{id}/favorites   - Cafes the user has favorited
//! POST   /users/{id}/favorites   - Add a favorite
//! DELETE /users/{id}/favorites   - Remove a favorite
//! ```

pub mod cafes;
pub mod favorites;
pub mod users;

use axum::{Router, routing::get};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the cafe routes router.
pub fn cafe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cafes::index).post(cafes::create))
        .route("/{id}", get(cafes::show))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route("/{id}", get(users::show))
        .route(
            "/{id}/favorites",
            get(favorites::index)
                .post(favorites::add)
                .delete(favorites::remove),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/cafes", cafe_routes())
        .nest("/users", user_routes())
}

/// Extract a required string field: present and non-empty.
///
/// An empty string counts as missing, matching the query-parameter
/// convention of treating empty values as absent.
pub(crate) fn require(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingField(field))
}
