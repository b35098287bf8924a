//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hearth_domain::id::RoomId;
use hearth_domain::room::{NewRoom, Room, RoomChanges};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a room.
#[derive(Deserialize)]
pub struct RoomRequest {
    pub name: String,
    pub house_id: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Room>>),
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
    Ok(Json<Room>),
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
    Created(Json<Room>),
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

/// `GET /rooms`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.hierarchy.list_rooms().await))
}

/// `GET /rooms/:id`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError> {
    let id: RoomId = super::path_id("Room", id)?;
    let room = state.hierarchy.get_room(id).await?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /rooms`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<RoomRequest>,
) -> Result<CreateResponse, ApiError> {
    let room = state
        .hierarchy
        .create_room(NewRoom {
            name: req.name,
            house_id: super::parent_id("House", req.house_id)?,
        })
        .await?;
    Ok(CreateResponse::Created(Json(room)))
}

/// `PATCH /rooms/:id`
///
/// A different `house_id` moves the room; an unknown house is a 400.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<RoomRequest>,
) -> Result<GetResponse, ApiError> {
    let id: RoomId = super::path_id("Room", id)?;
    let room = state
        .hierarchy
        .update_room(
            id,
            RoomChanges {
                name: req.name,
                house_id: super::parent_id("House", req.house_id)?,
            },
        )
        .await?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `DELETE /rooms/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError> {
    let id: RoomId = super::path_id("Room", id)?;
    state.hierarchy.delete_room(id).await?;
    Ok(DeleteResponse::NoContent)
}
