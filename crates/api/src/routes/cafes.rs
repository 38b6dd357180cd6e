//! Cafe route handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use studyspot_core::{Amenity, CafeId};

use crate::db::CafeRepository;
use crate::db::cafes::{CafeFilter, NewCafe};
use crate::error::{AppError, Result};
use crate::models::Cafe;
use crate::state::AppState;

use super::require;

/// Query parameters accepted by the cafe listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListCafesQuery {
    /// Exact city to filter by.
    pub city: Option<String>,
    /// Comma-separated amenity preferences.
    pub preferences: Option<String>,
}

impl ListCafesQuery {
    /// Validate the raw query parameters into a repository filter.
    ///
    /// Empty parameters count as absent. Every preference element must be
    /// in the fixed amenity set; the first one outside it fails the whole
    /// request before any query is issued.
    fn into_filter(self) -> Result<CafeFilter> {
        let city = self.city.filter(|c| !c.is_empty());

        let mut amenities = Vec::new();
        if let Some(preferences) = self.preferences.filter(|p| !p.is_empty()) {
            for pref in preferences.split(',') {
                amenities.push(pref.parse::<Amenity>()?);
            }
        }

        Ok(CafeFilter { city, amenities })
    }
}

/// List cafes, optionally filtered by city and amenity preferences.
///
/// GET /cafes?city=&preferences=
///
/// # Errors
///
/// Returns 400 for a preference outside the amenity set, 500 on a query
/// failure.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListCafesQuery>,
) -> Result<Json<Vec<Cafe>>> {
    let filter = query.into_filter()?;
    let cafes = CafeRepository::new(state.pool()).list(&filter).await?;
    Ok(Json(cafes))
}

/// Get a single cafe by ID.
///
/// GET /cafes/{id}
///
/// # Errors
///
/// Returns 404 if no cafe matches, 500 on a query failure.
pub async fn show(State(state): State<AppState>, Path(id): Path<CafeId>) -> Result<Json<Cafe>> {
    let cafe = CafeRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("cafe {id}")))?;
    Ok(Json(cafe))
}

/// Request body for creating a cafe.
///
/// Required fields arrive as options so that a missing one maps to a 400
/// naming the field instead of a body-deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCafeRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub power: bool,
    #[serde(default)]
    pub food: bool,
    pub image: Option<String>,
}

impl CreateCafeRequest {
    fn into_new_cafe(self) -> Result<NewCafe> {
        Ok(NewCafe {
            name: require(self.name, "name")?,
            address: require(self.address, "address")?,
            city: require(self.city, "city")?,
            rating: self.rating.ok_or(AppError::MissingField("rating"))?,
            wifi: self.wifi,
            power: self.power,
            food: self.food,
            image: require(self.image, "image")?,
        })
    }
}

/// Create a new cafe.
///
/// POST /cafes
///
/// Responds with the created cafe, generated ID included.
///
/// # Errors
///
/// Returns 400 naming the missing field, 500 on an insert failure.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCafeRequest>,
) -> Result<Json<Cafe>> {
    let cafe = CafeRepository::new(state.pool())
        .create(&body.into_new_cafe()?)
        .await?;
    Ok(Json(cafe))
}
