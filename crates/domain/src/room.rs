//! Room — part of a house, contains devices.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, HouseId, RoomId};

/// A room inside a [`House`](crate::house::House).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub house_id: HouseId,
    /// Devices installed in this room, in creation order.
    pub devices: Vec<DeviceId>,
}

/// Fields required to create a [`Room`].
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub house_id: HouseId,
}

/// Mutable fields of a [`Room`].
///
/// Changing `house_id` moves the room to another house.
#[derive(Debug, Clone)]
pub struct RoomChanges {
    pub name: String,
    pub house_id: HouseId,
}
