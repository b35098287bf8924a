//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hearth_domain::id::UserId;
use hearth_domain::user::{NewUser, User, UserChanges, validate_email};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a user.
#[derive(Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /users`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.hierarchy.list_users().await))
}

/// `GET /users/:id`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError> {
    let id: UserId = super::path_id("User", id)?;
    let user = state.hierarchy.get_user(id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /users`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<CreateResponse, ApiError> {
    validate_email(&req.email)?;
    let user = state
        .hierarchy
        .create_user(NewUser {
            name: req.name,
            email: req.email,
        })
        .await;
    Ok(CreateResponse::Created(Json(user)))
}

/// `PATCH /users/:id`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UserRequest>,
) -> Result<GetResponse, ApiError> {
    validate_email(&req.email)?;
    let id: UserId = super::path_id("User", id)?;
    let user = state
        .hierarchy
        .update_user(
            id,
            UserChanges {
                name: req.name,
                email: req.email,
            },
        )
        .await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `DELETE /users/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError> {
    let id: UserId = super::path_id("User", id)?;
    state.hierarchy.delete_user(id).await?;
    Ok(DeleteResponse::NoContent)
}
