//! Cafe repository for database operations.
//!
//! The listing filter is assembled with `sqlx::QueryBuilder`: amenity
//! column names come from the closed [`Amenity`] set and the city value is
//! always bound as a parameter, never concatenated.

use sqlx::{PgPool, Postgres, QueryBuilder};

use studyspot_core::{Amenity, CafeId};

use crate::models::Cafe;

const SELECT_CAFE: &str =
    "SELECT id, name, address, city, rating, quiet, cozy, lively, wifi, power, food, image \
     FROM cafes";

/// Filter applied to a cafe listing.
///
/// An amenity filter matches cafes with at least one of the requested
/// flags set; combined with a city filter it narrows to that city.
#[derive(Debug, Clone, Default)]
pub struct CafeFilter {
    /// Exact-match city filter.
    pub city: Option<String>,
    /// Amenities of which the cafe must have at least one.
    pub amenities: Vec<Amenity>,
}

/// Fields required to insert a cafe.
///
/// The ambience flags (`quiet`/`cozy`/`lively`) are not part of creation
/// and take their schema default.
#[derive(Debug, Clone)]
pub struct NewCafe {
    pub name: String,
    pub address: String,
    pub city: String,
    pub rating: f64,
    pub wifi: bool,
    pub power: bool,
    pub food: bool,
    pub image: String,
}

/// Repository for cafe database operations.
pub struct CafeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CafeRepository<'a> {
    /// Create a new cafe repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List cafes matching the filter.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn list(&self, filter: &CafeFilter) -> Result<Vec<Cafe>, sqlx::Error> {
        let mut query = build_list_query(filter);
        query.build_query_as::<Cafe>().fetch_all(self.pool).await
    }

    /// Get a cafe by its ID.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn get(&self, id: CafeId) -> Result<Option<Cafe>, sqlx::Error> {
        sqlx::query_as::<_, Cafe>(
            "SELECT id, name, address, city, rating, quiet, cozy, lively, wifi, power, food, image \
             FROM cafes \
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    /// Insert a new cafe and return it with its generated ID.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the insert fails.
    pub async fn create(&self, cafe: &NewCafe) -> Result<Cafe, sqlx::Error> {
        sqlx::query_as::<_, Cafe>(
            "INSERT INTO cafes (name, address, city, rating, wifi, power, food, image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id, name, address, city, rating, quiet, cozy, lively, wifi, power, food, image",
        )
        .bind(&cafe.name)
        .bind(&cafe.address)
        .bind(&cafe.city)
        .bind(cafe.rating)
        .bind(cafe.wifi)
        .bind(cafe.power)
        .bind(cafe.food)
        .bind(&cafe.image)
        .fetch_one(self.pool)
        .await
    }
}

/// Build the listing statement for a filter.
///
/// Shape: `... [WHERE city = $1] [AND|WHERE (a = TRUE OR b = TRUE ...)]`.
fn build_list_query(filter: &CafeFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new(SELECT_CAFE);

    if let Some(city) = &filter.city {
        query.push(" WHERE city = ");
        query.push_bind(city.as_str());
    }

    if !filter.amenities.is_empty() {
        query.push(if filter.city.is_some() {
            " AND ("
        } else {
            " WHERE ("
        });
        for (i, amenity) in filter.amenities.iter().enumerate() {
            if i > 0 {
                query.push(" OR ");
            }
            // Column name from the closed Amenity set, never raw input.
            query.push(amenity.column());
            query.push(" = TRUE");
        }
        query.push(")");
    }

    query
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_unfiltered() {
        let filter = CafeFilter::default();
        let query = build_list_query(&filter);
        assert_eq!(query.sql(), SELECT_CAFE);
    }

    #[test]
    fn test_list_query_city_only() {
        let filter = CafeFilter {
            city: Some("Portland".to_string()),
            amenities: Vec::new(),
        };
        let query = build_list_query(&filter);
        assert_eq!(query.sql(), format!("{SELECT_CAFE} WHERE city = $1"));
    }

    #[test]
    fn test_list_query_amenities_only() {
        let filter = CafeFilter {
            city: None,
            amenities: vec![Amenity::Wifi, Amenity::Power],
        };
        let query = build_list_query(&filter);
        assert_eq!(
            query.sql(),
            format!("{SELECT_CAFE} WHERE (wifi = TRUE OR power = TRUE)")
        );
    }

    #[test]
    fn test_list_query_city_and_amenities() {
        let filter = CafeFilter {
            city: Some("Portland".to_string()),
            amenities: vec![Amenity::Quiet],
        };
        let query = build_list_query(&filter);
        assert_eq!(
            query.sql(),
            format!("{SELECT_CAFE} WHERE city = $1 AND (quiet = TRUE)")
        );
    }

    #[test]
    fn test_list_query_all_amenities() {
        let filter = CafeFilter {
            city: None,
            amenities: Amenity::ALL.to_vec(),
        };
        let query = build_list_query(&filter);
        assert_eq!(
            query.sql(),
            format!(
                "{SELECT_CAFE} WHERE (quiet = TRUE OR cozy = TRUE OR lively = TRUE \
                 OR wifi = TRUE OR power = TRUE OR food = TRUE)"
            )
        );
    }
}
