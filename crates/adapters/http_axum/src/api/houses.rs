//! JSON REST handlers for houses.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hearth_domain::house::{House, HouseChanges, NewHouse};
use hearth_domain::id::HouseId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a house.
#[derive(Deserialize)]
pub struct CreateHouseRequest {
    pub name: String,
    pub address: String,
    pub user_id: i64,
}

/// Request body for updating a house. An owner sent along is ignored.
#[derive(Deserialize)]
pub struct UpdateHouseRequest {
    pub name: String,
    pub address: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<House>>),
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
    Ok(Json<House>),
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
    Created(Json<House>),
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

/// `GET /houses`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.hierarchy.list_houses().await))
}

/// `GET /houses/:id`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError> {
    let id: HouseId = super::path_id("House", id)?;
    let house = state.hierarchy.get_house(id).await?;
    Ok(GetResponse::Ok(Json(house)))
}

/// `POST /houses`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateHouseRequest>,
) -> Result<CreateResponse, ApiError> {
    let house = state
        .hierarchy
        .create_house(NewHouse {
            name: req.name,
            address: req.address,
            user_id: super::parent_id("User", req.user_id)?,
        })
        .await?;
    Ok(CreateResponse::Created(Json(house)))
}

/// `PATCH /houses/:id`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateHouseRequest>,
) -> Result<GetResponse, ApiError> {
    let id: HouseId = super::path_id("House", id)?;
    let house = state
        .hierarchy
        .update_house(
            id,
            HouseChanges {
                name: req.name,
                address: req.address,
            },
        )
        .await?;
    Ok(GetResponse::Ok(Json(house)))
}

/// `DELETE /houses/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError> {
    let id: HouseId = super::path_id("House", id)?;
    state.hierarchy.delete_house(id).await?;
    Ok(DeleteResponse::NoContent)
}
