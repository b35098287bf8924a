//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod houses;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use hearth_domain::error::{HearthError, InvalidParentError, NotFoundError};

use crate::state::AppState;

/// Resolve a signed id taken from the URL.
///
/// Ids are only ever issued as positive numbers, so a value that does not
/// fit is reported the same way as an unknown id.
fn path_id<T: TryFrom<i64>>(entity: &'static str, raw: i64) -> Result<T, HearthError> {
    T::try_from(raw).map_err(|_| {
        NotFoundError {
            entity,
            id: raw.to_string(),
        }
        .into()
    })
}

/// Resolve a signed parent id taken from a request body.
fn parent_id<T: TryFrom<i64>>(entity: &'static str, raw: i64) -> Result<T, HearthError> {
    T::try_from(raw).map_err(|_| {
        InvalidParentError {
            entity,
            id: raw.to_string(),
        }
        .into()
    })
}

/// Build the resource sub-router: one collection and one item route per kind.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/{id}",
            get(users::get).patch(users::update).delete(users::delete),
        )
        // Houses
        .route("/houses", get(houses::list).post(houses::create))
        .route(
            "/houses/{id}",
            get(houses::get).patch(houses::update).delete(houses::delete),
        )
        // Rooms
        .route("/rooms", get(rooms::list).post(rooms::create))
        .route(
            "/rooms/{id}",
            get(rooms::get).patch(rooms::update).delete(rooms::delete),
        )
        // Devices
        .route("/devices", get(devices::list).post(devices::create))
        .route(
            "/devices/{id}",
            get(devices::get)
                .patch(devices::update)
                .delete(devices::delete),
        )
}
