//! Favorite repository for database operations.
//!
//! Favorites have no representation of their own; they are only read back
//! as the joined list of a user's favorite cafes.

use sqlx::PgPool;

use studyspot_core::{CafeId, UserId};

use crate::models::Cafe;

/// Repository for favorite database operations.
pub struct FavoriteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the cafes a user has favorited.
    ///
    /// An unknown user simply yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Cafe>, sqlx::Error> {
        sqlx::query_as::<_, Cafe>(
            "SELECT c.id, c.name, c.address, c.city, c.rating, \
                    c.quiet, c.cozy, c.lively, c.wifi, c.power, c.food, c.image \
             FROM cafes c \
             JOIN favorites f ON c.id = f.cafe_id \
             WHERE f.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await
    }

    /// Record a favorite.
    ///
    /// Re-favoriting an already-favorited cafe is a no-op: the composite
    /// primary key makes the insert conflict and `DO NOTHING` swallows it.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the insert fails (including a foreign-key
    /// violation for an unknown user or cafe).
    pub async fn add(&self, user_id: UserId, cafe_id: CafeId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorites (user_id, cafe_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(cafe_id)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Remove a favorite.
    ///
    /// Removing a pair that was never favorited is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the delete fails.
    pub async fn remove(&self, user_id: UserId, cafe_id: CafeId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND cafe_id = $2")
            .bind(user_id)
            .bind(cafe_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
