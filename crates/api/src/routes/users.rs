//! User route handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use studyspot_core::UserId;

use crate::db::UserRepository;
use crate::db::users::NewUser;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::state::AppState;

use super::require;

/// List all users.
///
/// GET /users
///
/// # Errors
///
/// Returns 500 on a query failure.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Get a single user by ID.
///
/// GET /users/{id}
///
/// # Errors
///
/// Returns 404 if no user matches, 500 on a query failure.
pub async fn show(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
    Ok(Json(user))
}

/// Request body for creating a user.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    fn into_new_user(self) -> Result<NewUser> {
        Ok(NewUser {
            username: require(self.username, "username")?,
            password: require(self.password, "password")?,
            email: require(self.email, "email")?,
        })
    }
}

/// Create a new user.
///
/// POST /users
///
/// Responds with the created user, generated ID included.
///
/// # Errors
///
/// Returns 400 naming the missing field, 500 on an insert failure.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .create(&body.into_new_user()?)
        .await?;
    Ok(Json(user))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::test_util;

    #[tokio::test]
    async fn test_create_requires_every_required_field() {
        for missing in ["username", "password", "email"] {
            let mut body = serde_json::json!({
                "username": "late_night_reader",
                "password": "hunter2",
                "email": "reader@example.com",
            });
            body.as_object_mut().unwrap().remove(missing);

            let response = test_util::app()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/users")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = response.into_body().collect().await.unwrap().to_bytes();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(
                json["error"],
                format!("missing required field: {missing}")
            );
        }
    }
}
