//! Cafe domain type.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use studyspot_core::CafeId;

/// A study-cafe venue with its amenity flags.
///
/// Every read returns the full row, including the three ambience flags
/// (`quiet`/`cozy`/`lively`) that the creation endpoint does not accept;
/// those default to false and are populated at the data layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cafe {
    /// Unique cafe ID.
    pub id: CafeId,
    pub name: String,
    pub address: String,
    /// City, matched exactly by the listing filter.
    pub city: String,
    pub rating: f64,
    pub quiet: bool,
    pub cozy: bool,
    pub lively: bool,
    pub wifi: bool,
    pub power: bool,
    pub food: bool,
    /// Image URL for the venue.
    pub image: String,
}
