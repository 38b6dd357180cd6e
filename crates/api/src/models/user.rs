//! User domain type.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use studyspot_core::UserId;

/// A registered user.
///
/// The password is stored and returned exactly as submitted; hashing is
/// out of scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub email: String,
}
