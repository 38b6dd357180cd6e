//! Database operations for the studyspot `PostgreSQL` store.
//!
//! # Database: `studyspot`
//!
//! ## Tables
//!
//! - `cafes` - venue records with six boolean amenity columns
//! - `users` - registered users
//! - `favorites` - (user, cafe) associations
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE cafes (
//!     id      SERIAL PRIMARY KEY,
//!     name    TEXT NOT NULL,
//!     address TEXT NOT NULL,
//!     city    TEXT NOT NULL,
//!     rating  DOUBLE PRECISION NOT NULL,
//!     quiet   BOOLEAN NOT NULL DEFAULT FALSE,
//!     cozy    BOOLEAN NOT NULL DEFAULT FALSE,
//!     lively  BOOLEAN NOT NULL DEFAULT FALSE,
//!     wifi    BOOLEAN NOT NULL DEFAULT FALSE,
//!     power   BOOLEAN NOT NULL DEFAULT FALSE,
//!     food    BOOLEAN NOT NULL DEFAULT FALSE,
//!     image   TEXT NOT NULL
//! );
//!
//! CREATE TABLE users (
//!     id       SERIAL PRIMARY KEY,
//!     username TEXT NOT NULL UNIQUE,
//!     password TEXT NOT NULL,
//!     email    TEXT NOT NULL
//! );
//!
//! CREATE TABLE favorites (
//!     user_id INTEGER NOT NULL REFERENCES users(id),
//!     cafe_id INTEGER NOT NULL REFERENCES cafes(id),
//!     PRIMARY KEY (user_id, cafe_id)
//! );
//! ```

pub mod cafes;
pub mod favorites;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use cafes::CafeRepository;
pub use favorites::FavoriteRepository;
pub use users::UserRepository;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// Opened once at startup; every handler shares the same pool through
/// [`AppState`](crate::state::AppState).
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
