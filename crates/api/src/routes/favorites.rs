//! Favorite route handlers.
//!
//! Mutations respond with a `{"message": ...}` acknowledgment rather than
//! a resource representation; both add and remove are idempotent.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use studyspot_core::{CafeId, UserId};

use crate::db::FavoriteRepository;
use crate::error::{AppError, Result};
use crate::models::Cafe;
use crate::state::AppState;

/// Request body for favorite add/remove.
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteRequest {
    pub cafe_id: Option<CafeId>,
}

impl FavoriteRequest {
    fn cafe_id(self) -> Result<CafeId> {
        self.cafe_id.ok_or(AppError::MissingField("cafe_id"))
    }
}

/// Acknowledgment returned by favorite mutations.
#[derive(Debug, Serialize)]
pub struct FavoriteAck {
    pub message: &'static str,
}

/// List the cafes a user has favorited.
///
/// GET /users/{id}/favorites
///
/// # Errors
///
/// Returns 500 on a query failure.
pub async fn index(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<Vec<Cafe>>> {
    let cafes = FavoriteRepository::new(state.pool())
        .list_for_user(id)
        .await?;
    Ok(Json(cafes))
}

/// Add a cafe to a user's favorites.
///
/// POST /users/{id}/favorites
///
/// # Errors
///
/// Returns 400 if `cafe_id` is missing, 500 on an insert failure.
pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<FavoriteAck>> {
    let cafe_id = body.cafe_id()?;
    FavoriteRepository::new(state.pool()).add(id, cafe_id).await?;
    Ok(Json(FavoriteAck {
        message: "favorite added",
    }))
}

/// Remove a cafe from a user's favorites.
///
/// DELETE /users/{id}/favorites
///
/// Removing a pair that was never favorited still acknowledges success.
///
/// # Errors
///
/// Returns 400 if `cafe_id` is missing, 500 on a delete failure.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(body): Json<FavoriteRequest>,
) -> Result<Json<FavoriteAck>> {
    let cafe_id = body.cafe_id()?;
    FavoriteRepository::new(state.pool())
        .remove(id, cafe_id)
        .await?;
    Ok(Json(FavoriteAck {
        message: "favorite removed",
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::test_util;

    async fn mutate_without_cafe_id(method: Method) -> (StatusCode, serde_json::Value) {
        let response = test_util::app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/users/1/favorites")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_add_requires_cafe_id() {
        let (status, json) = mutate_without_cafe_id(Method::POST).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "missing required field: cafe_id");
    }

    #[tokio::test]
    async fn test_remove_requires_cafe_id() {
        let (status, json) = mutate_without_cafe_id(Method::DELETE).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "missing required field: cafe_id");
    }
}
