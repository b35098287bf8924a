//! House — owned by a user, contains rooms.

use serde::{Deserialize, Serialize};

use crate::id::{HouseId, RoomId, UserId};

/// A house belonging to exactly one [`User`](crate::user::User).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub name: String,
    pub address: String,
    pub user_id: UserId,
    /// Rooms of this house, in creation order.
    pub rooms: Vec<RoomId>,
}

/// Fields required to create a [`House`].
#[derive(Debug, Clone)]
pub struct NewHouse {
    pub name: String,
    pub address: String,
    pub user_id: UserId,
}

/// Mutable fields of a [`House`]. The owner cannot be changed.
#[derive(Debug, Clone)]
pub struct HouseChanges {
    pub name: String,
    pub address: String,
}
