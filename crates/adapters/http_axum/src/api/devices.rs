//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hearth_domain::device::{Device, NewDevice};
use hearth_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a device.
#[derive(Deserialize)]
pub struct CreateDeviceRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub room_id: i64,
    pub value: i64,
}

/// Request body for updating a device.
///
/// Clients usually send the full device; only `value` is read.
#[derive(Deserialize)]
pub struct UpdateDeviceRequest {
    pub value: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
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
    Ok(Json<Device>),
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
    Created(Json<Device>),
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

/// `GET /devices`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.hierarchy.list_devices().await))
}

/// `GET /devices/:id`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError> {
    let id: DeviceId = super::path_id("Device", id)?;
    let device = state.hierarchy.get_device(id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /devices`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<CreateResponse, ApiError> {
    let device = state
        .hierarchy
        .create_device(NewDevice {
            name: req.name,
            kind: req.kind,
            room_id: super::parent_id("Room", req.room_id)?,
            value: req.value,
        })
        .await?;
    Ok(CreateResponse::Created(Json(device)))
}

/// `PATCH /devices/:id`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateDeviceRequest>,
) -> Result<GetResponse, ApiError> {
    let id: DeviceId = super::path_id("Device", id)?;
    let device = state.hierarchy.update_device(id, req.value).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `DELETE /devices/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError> {
    let id: DeviceId = super::path_id("Device", id)?;
    state.hierarchy.delete_device(id).await?;
    Ok(DeleteResponse::NoContent)
}
